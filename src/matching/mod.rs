//! Name matching between SRD monsters and STL catalog entries.
//!
//! - [`MatchingEngine`]: main entry point, holds the catalog and thresholds
//! - [`Strategy`]: the named matching tiers, tried in a fixed order
//! - [`distance`]: case-insensitive Levenshtein distance
//!
//! ## Matching Algorithm
//!
//! [`MatchingEngine::find_matches`] tries, stopping at the first tier that
//! accepts anything:
//!
//! 1. **Exact**: lowercased names are equal
//! 2. **Adjacent phrase**: two neighbouring query words appear together as whole words
//! 3. **Whole word**: the first query word appears as a whole word
//! 4. **Fuzzy**: the nearest name, if within `max(3, ⌊0.25 × query length⌋)` edits
//!
//! [`MatchingEngine::find_closest_match`] uses exact, substring, first-word
//! substring, then the nearest name with no distance limit.
//!
//! ## Example
//!
//! ```rust
//! use stl_bestiary::catalog::store::Catalog;
//! use stl_bestiary::core::entry::CatalogEntry;
//! use stl_bestiary::matching::MatchingEngine;
//!
//! let catalog: Catalog = ["Rat Swarm", "Ratfolk", "Giant Rat"]
//!     .into_iter()
//!     .map(CatalogEntry::new)
//!     .collect();
//!
//! let engine = MatchingEngine::new(&catalog);
//! let result = engine.find_matches("Rat");
//! let names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["Rat Swarm", "Giant Rat"]);
//! ```
//!
//! [`distance`]: distance::distance

pub mod distance;
pub mod engine;
pub mod tiers;

pub use engine::{find_closest_match, find_matches, MatchResult, MatchingConfig, MatchingEngine};
pub use tiers::Strategy;
