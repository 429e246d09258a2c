//! Access to the outside world: the SRD monster API and the static STL catalog.
//!
//! [`RemoteSource`] is the seam the caches depend on; [`HttpSource`] is the
//! production implementation. Tests substitute in-process fakes.
//!
//! No request timeout is set unless one is passed to [`HttpSource::new`], so a
//! hung server blocks the load indefinitely.

pub mod http;
pub mod source;

pub use http::{CatalogLocation, HttpSource};
pub use source::{FetchError, RemoteSource};
