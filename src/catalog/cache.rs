//! Load-once caches for the STL catalog and the monster index.
//!
//! Both caches are plain values owned by whoever composes the application and
//! passed by reference to consumers. The first `get_or_load` performs the load;
//! concurrent first calls share it. A failed load leaves the cache empty, so the
//! next call tries again.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::api::source::{FetchError, RemoteSource};
use crate::catalog::snapshot::{snapshot_key, SnapshotStore};
use crate::catalog::store::Catalog;
use crate::core::entry::AuthoritativeEntry;

/// Cache-first access to the STL catalog
///
/// Lookup order on first load: in-memory value, then the persisted snapshot
/// for the configured schema version, then the network. A network load is
/// written back to the snapshot store; failures there are logged and ignored.
pub struct CatalogCache {
    source: Arc<dyn RemoteSource>,
    snapshots: Arc<dyn SnapshotStore>,
    schema_version: String,
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new(
        source: Arc<dyn RemoteSource>,
        snapshots: Arc<dyn SnapshotStore>,
        schema_version: impl Into<String>,
    ) -> Self {
        Self {
            source,
            snapshots,
            schema_version: schema_version.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Key of the snapshot slot this cache reads and writes
    pub fn snapshot_key(&self) -> String {
        snapshot_key(&self.schema_version)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the cached catalog, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns the fetch error when no usable snapshot exists and the catalog
    /// resource cannot be fetched or parsed.
    pub async fn get_or_load(&self) -> Result<Arc<Catalog>, FetchError> {
        self.cell
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    /// Drop the in-memory catalog and the snapshot for the current version
    pub fn invalidate(&mut self) {
        self.cell.take();
        let key = self.snapshot_key();
        if let Err(e) = self.snapshots.remove(&key) {
            warn!("Failed to remove catalog snapshot {key}: {e}");
        }
    }

    async fn load(&self) -> Result<Arc<Catalog>, FetchError> {
        if let Some(catalog) = self.read_snapshot() {
            return Ok(Arc::new(catalog));
        }

        let entries = self.source.fetch_catalog().await?;
        let catalog = Catalog::from_entries(entries);
        info!("Fetched STL catalog with {} entries", catalog.len());

        self.write_snapshot(&catalog);
        Ok(Arc::new(catalog))
    }

    fn read_snapshot(&self) -> Option<Catalog> {
        let key = self.snapshot_key();
        match self.snapshots.read(&key) {
            Ok(Some(json)) => match Catalog::from_json(&json) {
                Ok(catalog) => {
                    debug!("Loaded {} catalog entries from snapshot {key}", catalog.len());
                    Some(catalog)
                }
                Err(e) => {
                    warn!("Ignoring unreadable catalog snapshot {key}: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("No catalog snapshot under {key}");
                None
            }
            Err(e) => {
                warn!("Catalog snapshot store unavailable: {e}");
                None
            }
        }
    }

    fn write_snapshot(&self, catalog: &Catalog) {
        let key = self.snapshot_key();
        let json = match catalog.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize catalog snapshot: {e}");
                return;
            }
        };
        match self.snapshots.write(&key, &json) {
            Ok(()) => debug!("Saved catalog snapshot {key}"),
            Err(e) => warn!("Failed to save catalog snapshot {key}: {e}"),
        }
    }
}

/// Load-once cache of the authoritative monster index
pub struct MonsterIndexCache {
    source: Arc<dyn RemoteSource>,
    cell: OnceCell<Arc<[AuthoritativeEntry]>>,
}

impl MonsterIndexCache {
    pub fn new(source: Arc<dyn RemoteSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the cached index, fetching it on first use
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; there is no retry or fallback.
    pub async fn get_or_load(&self) -> Result<Arc<[AuthoritativeEntry]>, FetchError> {
        self.cell
            .get_or_try_init(|| async {
                let entries = self.source.fetch_monster_index().await?;
                info!("Fetched monster index with {} entries", entries.len());
                Ok::<_, FetchError>(Arc::from(entries))
            })
            .await
            .map(Arc::clone)
    }

    pub fn invalidate(&mut self) {
        self.cell.take();
    }
}
