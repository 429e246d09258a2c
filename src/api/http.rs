use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::source::{FetchError, RemoteSource};
use crate::core::detail::MonsterDetail;
use crate::core::entry::{AuthoritativeEntry, CatalogEntry, IndexListing};
use crate::core::types::MonsterId;

/// Default base URL of the D&D 5e SRD API
pub const DEFAULT_API_BASE: &str = "https://www.dnd5eapi.co";

/// Path of the monster collection under the API base
pub const MONSTERS_PATH: &str = "/api/2014/monsters";

/// Where the static STL catalog lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(String),
    Path(PathBuf),
}

impl CatalogLocation {
    /// `http://` and `https://` strings are URLs, anything else is a file path
    pub fn parse(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::Path(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// [`RemoteSource`] backed by the SRD API over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    api_base: String,
    catalog: CatalogLocation,
}

impl HttpSource {
    /// Build a source; `timeout` of `None` means requests may wait forever
    pub fn new(
        api_base: impl Into<String>,
        catalog: CatalogLocation,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let api_base = api_base.into().trim_end_matches('/').to_string();

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| FetchError::Http {
            url: api_base.clone(),
            source,
        })?;

        Ok(Self {
            client,
            api_base,
            catalog,
        })
    }

    pub fn index_url(&self) -> String {
        format!("{}{MONSTERS_PATH}", self.api_base)
    }

    pub fn detail_url(&self, id: &MonsterId) -> String {
        format!("{}{MONSTERS_PATH}/{id}", self.api_base)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            origin: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        match &self.catalog {
            CatalogLocation::Url(url) => self.get_json(url).await,
            CatalogLocation::Path(path) => {
                debug!("Reading catalog from {}", path.display());
                let origin = path.display().to_string();
                let content =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| FetchError::Io {
                            path: origin.clone(),
                            source,
                        })?;
                serde_json::from_str(&content).map_err(|source| FetchError::Parse { origin, source })
            }
        }
    }

    async fn fetch_monster_index(&self) -> Result<Vec<AuthoritativeEntry>, FetchError> {
        let listing: IndexListing = self.get_json(&self.index_url()).await?;
        Ok(listing.into_results())
    }

    async fn fetch_monster_detail(&self, id: &MonsterId) -> Result<MonsterDetail, FetchError> {
        self.get_json(&self.detail_url(id)).await
    }
}
