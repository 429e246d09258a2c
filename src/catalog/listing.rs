//! Browsing view of the STL catalog.
//!
//! Catalog descriptions carry the landing page of each model as the last URL in
//! free text, and names usually carry the file extension of the upload.

use crate::catalog::store::Catalog;
use crate::core::entry::CatalogEntry;

/// Landing pages on this host are hidden by default
pub const SHAPEWAYS_HOST: &str = "shapeways";

/// Last `http://` or `https://` URL in a description
pub fn landing_url(description: &str) -> Option<&str> {
    description.split_whitespace().rev().find_map(|token| {
        let start = [token.find("http://"), token.find("https://")]
            .into_iter()
            .flatten()
            .min()?;
        Some(&token[start..])
    })
}

/// Name without a trailing file extension (`Owlbear.stl` -> `Owlbear`)
pub fn display_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot)
            if dot + 1 < name.len()
                && name[dot + 1..].chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            &name[..dot]
        }
        _ => name,
    }
}

/// Landing URL of an entry, if its description has one
pub fn entry_landing_url(entry: &CatalogEntry) -> Option<&str> {
    entry.description.as_deref().and_then(landing_url)
}

/// Filter for [`browse`]
#[derive(Debug, Clone)]
pub struct BrowseFilter {
    /// Case-insensitive substring the name must contain
    pub search: Option<String>,
    /// Drop entries whose landing page is on Shapeways
    pub hide_shapeways: bool,
}

impl Default for BrowseFilter {
    fn default() -> Self {
        Self {
            search: None,
            hide_shapeways: true,
        }
    }
}

/// Entries with a landing page, filtered and sorted case-insensitively by name
pub fn browse<'c>(catalog: &'c Catalog, filter: &BrowseFilter) -> Vec<&'c CatalogEntry> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut entries: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|entry| {
            let Some(url) = entry_landing_url(entry) else {
                return false;
            };
            if filter.hide_shapeways && url.to_lowercase().contains(SHAPEWAYS_HOST) {
                return false;
            }
            search
                .as_deref()
                .map_or(true, |s| entry.name.to_lowercase().contains(s))
        })
        .collect();

    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
    entries
}
