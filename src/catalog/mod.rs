//! STL catalog storage, persistence and caching.
//!
//! The catalog is a JSON array of printable models served as a static
//! resource. It is loaded once per [`CatalogCache`] and persisted as a
//! versioned snapshot so later runs skip the network entirely.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stl_bestiary::api::{CatalogLocation, HttpSource};
//! use stl_bestiary::catalog::cache::CatalogCache;
//! use stl_bestiary::catalog::snapshot::{DirectorySnapshotStore, DEFAULT_SCHEMA_VERSION};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let source = HttpSource::new(
//!     "https://www.dnd5eapi.co",
//!     CatalogLocation::parse("monsters.json"),
//!     None,
//! )?;
//! let snapshots = DirectorySnapshotStore::new("/tmp/stl-bestiary");
//! let cache = CatalogCache::new(Arc::new(source), Arc::new(snapshots), DEFAULT_SCHEMA_VERSION);
//!
//! let catalog = cache.get_or_load().await?;
//! println!("{} models", catalog.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`CatalogCache`]: cache::CatalogCache

pub mod cache;
pub mod listing;
pub mod snapshot;
pub mod store;
