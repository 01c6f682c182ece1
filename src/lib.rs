//! **A terminal client for discovering movies.**
//!
//! `movie-scout` talks to a TMDB-compatible movie catalog and an
//! Appwrite-compatible document store. It powers a command-line binary with
//! an interactive search-as-you-type browser, and doubles as a small library
//! for the same operations.
//!
//! ## Key Features
//!
//! - **Debounced live search**: keystrokes coalesce into a single catalog
//!   request per quiet period, and stale responses can never overwrite the
//!   results of a newer query.
//! - **Popular movies**: an empty search shows the catalog's most popular
//!   titles instead of an empty screen.
//! - **Trending searches**: every successful search bumps a per-term counter
//!   in the document store; the top terms feed a trending panel.
//!
//! ## Core Modules
//!
//! - **[`catalog`]**: the read-only movie catalog client and the
//!   [`MovieCatalog`] trait the rest of the crate programs against.
//! - **[`analytics`]**: the search-count store behind [`TrendingStore`].
//!   Tracking is strictly best-effort; its failures never reach the user.
//! - **[`tui`]**: the interactive browser. All state transitions live in
//!   [`BrowseApp`], which owns no I/O and is fully testable with a clock.
//! - **[`config`]**: YAML config with environment and CLI layering.
//!
//! ## Getting Started
//!
//! ```no_run
//! use movie_scout::catalog::{CatalogClient, MovieCatalog};
//! use movie_scout::config::CatalogConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig {
//!         api_token: std::env::var("TMDB_API_TOKEN").ok(),
//!         ..CatalogConfig::default()
//!     };
//!     let catalog = CatalogClient::new(&config)?;
//!
//!     let response = catalog.search("batman")?;
//!     for movie in response.results.iter().take(5) {
//!         println!("{} ({})", movie.title, movie.release_year().unwrap_or("----"));
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔u16/f64 casts in TUI layout math are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors sections are aspirational
    clippy::missing_errors_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines
)]

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod tui;

// Re-export main types for convenience
pub use analytics::{AnalyticsClient, SearchTermRecord, TrendingStore};
pub use catalog::{CatalogClient, Movie, MovieCatalog, SearchResponse};
pub use config::{AnalyticsConfig, AppConfig, CatalogConfig, TuiConfig};
pub use error::{MovieScoutError, Result};
pub use tui::{BrowseApp, FETCH_ERROR_MESSAGE};
