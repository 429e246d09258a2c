use clap::Args;
use serde::Serialize;

use crate::cli::{tsv_field, Context, OutputFormat};
use crate::core::entry::AuthoritativeEntry;
use crate::matching::{MatchResult, MatchingEngine};

#[derive(Args)]
pub struct MonstersArgs {
    /// Only monsters whose name contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    /// Show at most this many monsters
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only monsters without any STL match
    #[arg(long)]
    pub unmatched: bool,
}

#[derive(Serialize)]
struct MonsterRow<'a> {
    id: &'a str,
    name: &'a str,
    tier: Option<&'static str>,
    matches: Vec<&'a str>,
}

impl<'a> MonsterRow<'a> {
    fn new(monster: &'a AuthoritativeEntry, result: &MatchResult<'a>) -> Self {
        Self {
            id: monster.id.as_str(),
            name: &monster.name,
            tier: result.tier.map(|t| t.label()),
            matches: result.iter().map(|e| e.name.as_str()).collect(),
        }
    }
}

/// Execute the monsters subcommand
///
/// # Errors
///
/// Returns an error if the monster index or the catalog cannot be loaded.
pub async fn run(args: MonstersArgs, ctx: &Context, format: OutputFormat) -> anyhow::Result<()> {
    let index = ctx.index.get_or_load().await?;
    let catalog = ctx.catalog.get_or_load().await?;
    let engine = MatchingEngine::new(&catalog);

    let filter = args.filter.as_deref().map(str::to_lowercase);
    let rows: Vec<MonsterRow<'_>> = index
        .iter()
        .filter(|m| {
            filter
                .as_deref()
                .map_or(true, |f| m.name.to_lowercase().contains(f))
        })
        .map(|m| MonsterRow::new(m, &engine.find_matches(&m.name)))
        .filter(|row| !args.unmatched || row.matches.is_empty())
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    match format {
        OutputFormat::Text => print_text(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Tsv => print_tsv(&rows),
    }

    Ok(())
}

fn print_text(rows: &[MonsterRow<'_>]) {
    if rows.is_empty() {
        eprintln!("No monsters to show.");
        return;
    }

    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for row in rows {
        match row.tier {
            Some(tier) => println!(
                "{:<width$}  {:>3} STL ({tier})",
                row.name,
                row.matches.len()
            ),
            None => println!("{:<width$}    - STL", row.name),
        }
    }

    let matched = rows.iter().filter(|r| !r.matches.is_empty()).count();
    println!("\n{matched}/{} monsters have STL matches", rows.len());
}

fn print_tsv(rows: &[MonsterRow<'_>]) {
    println!("id\tname\ttier\tmatch_count\tmatches");
    for row in rows {
        let matches: Vec<String> = row.matches.iter().map(|m| tsv_field(m)).collect();
        println!(
            "{}\t{}\t{}\t{}\t{}",
            tsv_field(row.id),
            tsv_field(row.name),
            row.tier.unwrap_or(""),
            row.matches.len(),
            matches.join("; ")
        );
    }
}
