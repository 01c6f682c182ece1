//! Catalog API response types.

use crate::config::IMAGE_BASE_URL;
use serde::{Deserialize, Serialize};

/// Fallback message when the catalog flags a logical failure without
/// supplying one of its own.
pub const API_FAILURE_FALLBACK: &str = "Failed to fetch movie";

/// A movie as returned by the catalog. Read-only, never persisted locally
/// beyond the current render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Full poster URL: fixed image-host prefix + poster path.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }

    /// Release year, when the catalog supplied a date.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| !year.is_empty())
    }
}

/// Envelope for `search/movie` and `discover/movie` responses.
///
/// The catalog can answer 200 and still signal a logical failure through
/// the `Response`/`Error` pair, so callers must check [`api_failure`]
/// before trusting `results`.
///
/// [`api_failure`]: SearchResponse::api_failure
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(rename = "Response", default)]
    pub response: Option<bool>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Returns the failure message when the body signals an API-level
    /// failure, using the fixed fallback if the server omitted one.
    #[must_use]
    pub fn api_failure(&self) -> Option<String> {
        if self.response == Some(false) {
            Some(
                self.error
                    .clone()
                    .unwrap_or_else(|| API_FAILURE_FALLBACK.to_string()),
            )
        } else {
            None
        }
    }
}
