use clap::{Args, Subcommand};

use crate::catalog::listing::{browse, display_name, entry_landing_url, BrowseFilter};
use crate::cli::render::EntryView;
use crate::cli::{tsv_field, Context, OutputFormat};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog models that have a landing page, sorted by name
    List {
        /// Only names containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Include models hosted on Shapeways
        #[arg(long)]
        show_shapeways: bool,
    },

    /// Discard the cached snapshot and download the catalog again
    Refresh,
}

/// Execute the catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn run(
    args: CatalogArgs,
    ctx: &mut Context,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            search,
            show_shapeways,
        } => {
            let filter = BrowseFilter {
                search,
                hide_shapeways: !show_shapeways,
            };
            run_list(ctx, &filter, format, verbose).await
        }
        CatalogCommands::Refresh => run_refresh(ctx, format).await,
    }
}

async fn run_list(
    ctx: &Context,
    filter: &BrowseFilter,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = ctx.catalog.get_or_load().await?;
    let entries = browse(&catalog, filter);

    if verbose {
        eprintln!(
            "Showing {} of {} catalog entries",
            entries.len(),
            catalog.len()
        );
    }

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                println!(
                    "{}\t{}",
                    display_name(&entry.name),
                    entry_landing_url(entry).unwrap_or_default()
                );
            }
        }
        OutputFormat::Json => {
            let views: Vec<EntryView<'_>> = entries.iter().map(|e| EntryView::from(*e)).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Tsv => {
            println!("name\tdisplay_name\tlanding\tdownload\timage");
            for entry in &entries {
                let view = EntryView::from(*entry);
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    tsv_field(view.name),
                    tsv_field(view.display_name),
                    view.landing.map(tsv_field).unwrap_or_default(),
                    view.download.map(tsv_field).unwrap_or_default(),
                    view.image.map(tsv_field).unwrap_or_default(),
                );
            }
        }
    }

    Ok(())
}

async fn run_refresh(ctx: &mut Context, format: OutputFormat) -> anyhow::Result<()> {
    ctx.catalog.invalidate();
    let catalog = ctx.catalog.get_or_load().await?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "snapshot": ctx.catalog.snapshot_key(),
                "entries": catalog.len(),
            })
        ),
        OutputFormat::Text | OutputFormat::Tsv => println!(
            "Reloaded {} catalog entries into snapshot {}",
            catalog.len(),
            ctx.catalog.snapshot_key()
        ),
    }

    Ok(())
}
