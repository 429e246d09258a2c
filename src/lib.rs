//! # stl-bestiary
//!
//! A library for pairing D&D 5e monsters with 3D-printable STL models.
//!
//! The SRD API lists every monster under its canonical name, while a curated
//! STL catalog names its models however the sculptor uploaded them: plurals,
//! file extensions, extra words, partial names. `stl-bestiary` bridges the two
//! with a tiered name matcher and caches both sides so a session touches the
//! network at most once per resource.
//!
//! ## Features
//!
//! - **Tiered matching**: exact, adjacent phrase, whole word, then a guarded fuzzy fallback
//! - **Closest match**: a single best entry with an unbounded fuzzy fallback
//! - **Load-once caches**: explicit cache objects for the catalog and the monster index
//! - **Versioned snapshots**: the catalog is persisted locally under a schema-version key
//! - **Catalog browsing**: landing-page extraction, filtering and sorting
//!
//! ## Example
//!
//! ```rust
//! use stl_bestiary::{Catalog, CatalogEntry, MatchingEngine, Strategy};
//!
//! let catalog: Catalog = ["Goblin Archer", "Cave Giant Ape Statue", "Ratfolk"]
//!     .into_iter()
//!     .map(CatalogEntry::new)
//!     .collect();
//!
//! let engine = MatchingEngine::new(&catalog);
//! let result = engine.find_matches("Giant Ape");
//!
//! assert_eq!(result.tier, Some(Strategy::AdjacentPhrase));
//! assert_eq!(result.entries[0].name, "Cave Giant Ape Statue");
//! ```
//!
//! ## Modules
//!
//! - [`api`]: HTTP access to the SRD API and the static catalog resource
//! - [`catalog`]: Catalog storage, snapshots, caches and browsing
//! - [`core`]: Core data types for catalog entries and monsters
//! - [`matching`]: Edit distance and the tiered match resolver
//! - [`cli`]: Command-line interface implementation

pub mod api;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;

// Re-export commonly used types for convenience
pub use crate::api::{FetchError, RemoteSource};
pub use crate::catalog::cache::{CatalogCache, MonsterIndexCache};
pub use crate::catalog::store::Catalog;
pub use crate::core::entry::{AuthoritativeEntry, CatalogEntry};
pub use crate::core::types::MonsterId;
pub use crate::matching::{MatchResult, MatchingConfig, MatchingEngine, Strategy};
