use clap::Args;

use crate::cli::render::{print_entry_text, print_matches_text, EntryView, MatchView};
use crate::cli::{tsv_field, Context, OutputFormat};
use crate::matching::engine::{
    MatchingConfig, MatchingEngine, DEFAULT_FUZZY_THRESHOLD_RATIO, DEFAULT_MIN_FUZZY_THRESHOLD,
};
use crate::matching::MatchResult;

#[derive(Args)]
pub struct MatchArgs {
    /// Monster name to look up
    #[arg(required = true)]
    pub name: String,

    /// Return only the single closest entry (no distance limit on the fuzzy step)
    #[arg(long)]
    pub closest: bool,

    /// Smallest edit distance the fuzzy step always accepts
    #[arg(long, default_value_t = DEFAULT_MIN_FUZZY_THRESHOLD)]
    pub min_threshold: usize,

    /// Accepted edit distance as a fraction of the name length
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD_RATIO)]
    pub threshold_ratio: f64,
}

/// Execute the match subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
pub async fn run(args: MatchArgs, ctx: &Context, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = ctx.catalog.get_or_load().await?;

    if catalog.is_empty() {
        eprintln!("Warning: STL catalog is empty, nothing to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        min_fuzzy_threshold: args.min_threshold,
        fuzzy_threshold_ratio: args.threshold_ratio,
    };
    let engine = MatchingEngine::with_config(&catalog, config);

    if args.closest {
        let closest = engine.find_closest_match_with_tier(&args.name);
        match format {
            OutputFormat::Text => match closest {
                Some((tier, entry)) => {
                    println!("{}: closest ({tier})", args.name);
                    print_entry_text(0, entry);
                }
                None => println!("{}: no STL matches", args.name),
            },
            OutputFormat::Json => {
                let view = serde_json::json!({
                    "query": args.name,
                    "tier": closest.map(|(tier, _)| tier.label()),
                    "closest": closest.map(|(_, entry)| EntryView::from(entry)),
                });
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            OutputFormat::Tsv => {
                print_tsv_header();
                if let Some((tier, entry)) = closest {
                    print_tsv_row(&args.name, tier.label(), &EntryView::from(entry));
                }
            }
        }
        return Ok(());
    }

    let result = engine.find_matches(&args.name);
    match format {
        OutputFormat::Text => print_matches_text(&args.name, &result),
        OutputFormat::Json => {
            let view = MatchView::new(&args.name, &result);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Tsv => print_tsv_results(&args.name, &result),
    }

    Ok(())
}

fn print_tsv_header() {
    println!("query\ttier\tname\tdownload\tlanding");
}

fn print_tsv_row(query: &str, tier: &str, view: &EntryView<'_>) {
    println!(
        "{}\t{tier}\t{}\t{}\t{}",
        tsv_field(query),
        tsv_field(view.name),
        view.download.map(tsv_field).unwrap_or_default(),
        view.landing.map(tsv_field).unwrap_or_default(),
    );
}

fn print_tsv_results(query: &str, result: &MatchResult<'_>) {
    print_tsv_header();
    if let Some(tier) = result.tier {
        for entry in result.iter() {
            print_tsv_row(query, tier.label(), &EntryView::from(entry));
        }
    }
}
