use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::http::{CatalogLocation, HttpSource};
use crate::api::source::RemoteSource;
use crate::catalog::cache::{CatalogCache, MonsterIndexCache};
use crate::catalog::snapshot::{DirectorySnapshotStore, MemorySnapshotStore, SnapshotStore};
use crate::cli::Cli;

/// Composition root: owns the remote source and both caches for one run
pub struct Context {
    pub source: Arc<dyn RemoteSource>,
    pub catalog: CatalogCache,
    pub index: MonsterIndexCache,
}

impl Context {
    /// Wire the caches to an arbitrary source and snapshot store
    pub fn new(
        source: Arc<dyn RemoteSource>,
        snapshots: Arc<dyn SnapshotStore>,
        schema_version: &str,
    ) -> Self {
        Self {
            catalog: CatalogCache::new(Arc::clone(&source), snapshots, schema_version),
            index: MonsterIndexCache::new(Arc::clone(&source)),
            source,
        }
    }

    /// Build the production context from command-line options
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let catalog = CatalogLocation::parse(&cli.catalog_location);
        debug!("STL catalog location: {catalog}");

        let source = HttpSource::new(
            cli.api_url.clone(),
            catalog,
            cli.timeout.map(Duration::from_secs),
        )?;

        let snapshots: Arc<dyn SnapshotStore> = if cli.no_snapshot {
            Arc::new(MemorySnapshotStore::new())
        } else if let Some(dir) = resolve_cache_dir(cli) {
            debug!("Catalog snapshots in {}", dir.display());
            Arc::new(DirectorySnapshotStore::new(dir))
        } else {
            warn!("No cache directory available; catalog snapshot kept in memory");
            Arc::new(MemorySnapshotStore::new())
        };

        Ok(Self::new(Arc::new(source), snapshots, &cli.schema_version))
    }
}

fn resolve_cache_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = cli.cache_dir.clone() {
        return Some(dir);
    }
    dirs::cache_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")))
}
