//! Output helpers shared by the commands.

use serde::Serialize;

use crate::catalog::listing::{display_name, entry_landing_url};
use crate::core::entry::CatalogEntry;
use crate::matching::MatchResult;

/// JSON/TSV view of one catalog entry
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub name: &'a str,
    pub display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<&'a str>,
}

impl<'a> From<&'a CatalogEntry> for EntryView<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            name: &entry.name,
            display_name: display_name(&entry.name),
            download: entry.download_ref.as_deref(),
            image: entry.image_ref.as_deref(),
            landing: entry_landing_url(entry),
        }
    }
}

/// JSON view of the matches for one query
#[derive(Debug, Serialize)]
pub struct MatchView<'a> {
    pub query: &'a str,
    pub tier: Option<&'static str>,
    pub matches: Vec<EntryView<'a>>,
}

impl<'a> MatchView<'a> {
    pub fn new(query: &'a str, result: &MatchResult<'a>) -> Self {
        Self {
            query,
            tier: result.tier.map(|t| t.label()),
            matches: result.iter().map(EntryView::from).collect(),
        }
    }
}

/// Print one entry as an indented text block
pub fn print_entry_text(index: usize, entry: &CatalogEntry) {
    println!("  #{} {}", index + 1, display_name(&entry.name));
    if let Some(url) = entry_landing_url(entry) {
        println!("     Landing: {url}");
    }
    if let Some(download) = &entry.download_ref {
        println!("     Download: {download}");
    }
    if let Some(image) = &entry.image_ref {
        println!("     Image: {image}");
    }
}

/// Print the matched entries of a query as text
pub fn print_matches_text(query: &str, result: &MatchResult<'_>) {
    match result.tier {
        Some(tier) => println!(
            "{query}: {} match{} ({tier})",
            result.len(),
            if result.len() == 1 { "" } else { "es" }
        ),
        None => println!("{query}: no STL matches"),
    }
    for (i, entry) in result.iter().enumerate() {
        print_entry_text(i, entry);
    }
}
