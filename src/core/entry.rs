use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::MonsterId;

/// One printable item from the curated STL catalog
///
/// The wire names (`Name`, `Stl`, `Url`, `Description`) are the ones used by
/// the static catalog resource and by persisted snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name of the model, often with a file extension (`Goblin Archer.stl`)
    #[serde(rename = "Name")]
    pub name: String,

    /// Where the STL file itself can be downloaded
    #[serde(rename = "Stl", default, skip_serializing_if = "Option::is_none")]
    pub download_ref: Option<String>,

    /// Preview image of the printed model
    #[serde(rename = "Url", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,

    /// Free text; the last URL in it is the landing page for the model
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_ref: None,
            image_ref: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_download_ref(mut self, download_ref: impl Into<String>) -> Self {
        self.download_ref = Some(download_ref.into());
        self
    }

    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lookup key: the lowercased name
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// One canonical creature from the SRD monster index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritativeEntry {
    #[serde(rename = "index")]
    pub id: MonsterId,

    pub name: String,

    /// API path of the detail record (e.g. `/api/2014/monsters/aboleth`)
    #[serde(rename = "url")]
    pub source_ref: String,
}

impl AuthoritativeEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: MonsterId::new(id),
            name: name.into(),
            source_ref: source_ref.into(),
        }
    }
}

/// Envelope returned by the index endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct IndexListing {
    #[serde(default)]
    pub count: Option<usize>,
    pub results: Vec<AuthoritativeEntry>,
}

impl IndexListing {
    /// The listed entries; a `count` that disagrees with them is logged, not fatal
    pub fn into_results(self) -> Vec<AuthoritativeEntry> {
        match self.count {
            Some(count) if count != self.results.len() => warn!(
                "Monster index reports {count} entries but lists {}",
                self.results.len()
            ),
            Some(count) => debug!("Monster index lists {count} entries"),
            None => debug!("Monster index has no count field"),
        }
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_wire_names() {
        let json = r#"{"Name":"Owlbear.stl","Stl":"https://files/owlbear.stl","Url":"https://img/owlbear.png","Description":"See https://example.com/owlbear"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name, "Owlbear.stl");
        assert_eq!(entry.download_ref.as_deref(), Some("https://files/owlbear.stl"));
        assert_eq!(entry.image_ref.as_deref(), Some("https://img/owlbear.png"));
        assert!(entry.description.unwrap().contains("example.com"));
    }

    #[test]
    fn test_catalog_entry_optional_fields() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"Name":"Ogre"}"#).unwrap();
        assert_eq!(entry, CatalogEntry::new("Ogre"));

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"Name":"Ogre"}"#);
    }

    #[test]
    fn test_catalog_entry_key_is_lowercase() {
        assert_eq!(CatalogEntry::new("Goblin ARCHER").key(), "goblin archer");
    }

    #[test]
    fn test_index_listing_shape() {
        let json = r#"{"count":1,"results":[{"index":"aboleth","name":"Aboleth","url":"/api/2014/monsters/aboleth"}]}"#;
        let listing: IndexListing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.count, Some(1));
        assert_eq!(
            listing.into_results(),
            vec![AuthoritativeEntry::new(
                "aboleth",
                "Aboleth",
                "/api/2014/monsters/aboleth"
            )]
        );
    }

    #[test]
    fn test_index_listing_count_mismatch_keeps_results() {
        let json = r#"{"count":334,"results":[{"index":"imp","name":"Imp","url":"/api/2014/monsters/imp"}]}"#;
        let listing: IndexListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.count, Some(334));

        let results = listing.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, MonsterId::new("imp"));

        let listing: IndexListing = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert_eq!(listing.count, None);
        assert!(listing.into_results().is_empty());
    }
}
