//! Core data types for monster and STL catalog entries.
//!
//! - [`CatalogEntry`]: one printable model from the curated STL catalog
//! - [`AuthoritativeEntry`]: one canonical creature from the SRD monster index
//! - [`MonsterDetail`]: the per-monster detail record, with its union-shaped fields
//! - [`MonsterId`], [`Size`]: small identifier and classification types
//!
//! [`CatalogEntry`]: entry::CatalogEntry
//! [`AuthoritativeEntry`]: entry::AuthoritativeEntry
//! [`MonsterDetail`]: detail::MonsterDetail
//! [`MonsterId`]: types::MonsterId
//! [`Size`]: types::Size

pub mod detail;
pub mod entry;
pub mod types;
