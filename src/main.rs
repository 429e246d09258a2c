use clap::Parser;
use tracing_subscriber::EnvFilter;

use stl_bestiary::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("stl_bestiary=debug,info")
    } else {
        EnvFilter::new("stl_bestiary=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(cli::run(cli))
}
