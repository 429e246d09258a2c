//! Command-line interface for stl-bestiary.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Find STL catalog entries for a monster name
//! - **monsters**: List SRD monsters with how many STL entries each one matches
//! - **show**: Show one monster's detail record and its STL entries
//! - **catalog**: Browse the STL catalog or refresh its snapshot
//!
//! ## Usage
//!
//! ```text
//! # Everything printable for a monster
//! stl-bestiary match "Adult Black Dragon"
//!
//! # Single closest entry, no distance limit
//! stl-bestiary match "Ooze" --closest
//!
//! # Monsters with no printable model yet
//! stl-bestiary monsters --unmatched
//!
//! # JSON output for scripting
//! stl-bestiary show aboleth --format json
//!
//! # Re-download the catalog
//! stl-bestiary catalog refresh
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod context;
pub mod lookup;
pub mod monsters;
pub mod render;
pub mod show;

pub use context::Context;

#[derive(Parser)]
#[command(name = "stl-bestiary")]
#[command(version)]
#[command(about = "Cross-reference D&D 5e monsters with 3D-printable STL files")]
#[command(
    long_about = "stl-bestiary pairs monsters from the D&D 5e SRD API with entries of a curated catalog of printable models.\n\nNames rarely line up exactly, so entries are matched in tiers:\n- Exact name\n- Two adjacent words of the monster name as a phrase\n- The first word as a whole word\n- A close spelling, within a few edits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Base URL of the D&D 5e SRD API
    #[arg(
        long,
        global = true,
        env = "STL_BESTIARY_API_URL",
        default_value = crate::api::http::DEFAULT_API_BASE
    )]
    pub api_url: String,

    /// STL catalog location: an http(s) URL or a local JSON file
    #[arg(
        long = "catalog",
        global = true,
        env = "STL_BESTIARY_CATALOG",
        default_value = "monsters.json"
    )]
    pub catalog_location: String,

    /// Directory for catalog snapshots (defaults to the user cache directory)
    #[arg(long, global = true, env = "STL_BESTIARY_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Snapshot schema version; changing it ignores older snapshots
    #[arg(
        long,
        global = true,
        default_value = crate::catalog::snapshot::DEFAULT_SCHEMA_VERSION
    )]
    pub schema_version: String,

    /// Keep the catalog snapshot in memory only
    #[arg(long, global = true)]
    pub no_snapshot: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find STL catalog entries for a monster name
    Match(lookup::MatchArgs),

    /// List SRD monsters and their STL matches
    Monsters(monsters::MonstersArgs),

    /// Show a monster's details and STL matches
    Show(show::ShowArgs),

    /// Browse or refresh the STL catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Run the parsed command against a freshly composed [`Context`]
///
/// # Errors
///
/// Returns an error if the context cannot be built or the command fails.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Match(args) => lookup::run(args, &ctx, cli.format).await,
        Commands::Monsters(args) => monsters::run(args, &ctx, cli.format).await,
        Commands::Show(args) => show::run(args, &ctx, cli.format).await,
        Commands::Catalog(args) => catalog::run(args, &mut ctx, cli.format, cli.verbose).await,
    }
}

/// Replace tabs and newlines so a value stays in its TSV column
pub(crate) fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
