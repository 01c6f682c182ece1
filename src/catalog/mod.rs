//! Movie catalog access.
//!
//! One HTTP client ([`CatalogClient`]) plus the response model. The
//! [`MovieCatalog`] trait is the seam the interactive app and the CLI
//! commands program against, so tests can substitute a fake catalog
//! without any network plumbing.

mod client;
mod response;

pub use client::CatalogClient;
pub use response::{Movie, SearchResponse, API_FAILURE_FALLBACK};

use crate::error::Result;

/// Read-only movie catalog operations.
pub trait MovieCatalog: Send + Sync {
    /// Search for movies matching a query string.
    fn search(&self, query: &str) -> Result<SearchResponse>;

    /// List currently popular movies, most popular first.
    fn discover_popular(&self) -> Result<SearchResponse>;
}
