use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::entry::CatalogEntry;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// The STL catalog with its name lookup
///
/// `entries` keeps every record in declaration order, exactly as loaded. Lookups
/// and matching see one entry per lowercased name: the last record with that
/// name wins, but it keeps the position where the name first appeared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All records, in declaration order
    entries: Vec<CatalogEntry>,

    /// Index: lowercased name -> slot in `distinct`
    by_name: HashMap<String, usize>,

    /// Indices into `entries`, one per distinct lowercased name
    distinct: Vec<usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in declaration order
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add_entry(entry);
        }
        catalog
    }

    /// Load a catalog from a JSON file holding an array of records
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Serialize all records back to the JSON array they were loaded from
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Add a record; a duplicate lowercased name replaces the earlier record in lookups
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        let index = self.entries.len();
        let key = entry.key();

        match self.by_name.get(&key) {
            Some(&slot) => self.distinct[slot] = index,
            None => {
                self.by_name.insert(key, self.distinct.len());
                self.distinct.push(index);
            }
        }

        self.entries.push(entry);
    }

    /// Get an entry by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&slot| &self.entries[self.distinct[slot]])
    }

    /// Distinct entries in catalog order; this is what matching iterates over
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.distinct.iter().map(|&idx| &self.entries[idx])
    }

    /// Every record as loaded, duplicates included
    pub fn records(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.distinct.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
