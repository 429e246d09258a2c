use async_trait::async_trait;
use thiserror::Error;

use crate::core::detail::MonsterDetail;
use crate::core::entry::{AuthoritativeEntry, CatalogEntry};
use crate::core::types::MonsterId;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse response from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the caches and the CLI need from the outside world
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the static STL catalog resource
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError>;

    /// Fetch the authoritative monster listing
    async fn fetch_monster_index(&self) -> Result<Vec<AuthoritativeEntry>, FetchError>;

    /// Fetch the detail record of one monster
    async fn fetch_monster_detail(&self, id: &MonsterId) -> Result<MonsterDetail, FetchError>;
}
