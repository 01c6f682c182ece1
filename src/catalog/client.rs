//! HTTP client for the movie catalog API.

use super::response::SearchResponse;
use super::MovieCatalog;
use crate::config::CatalogConfig;
use crate::error::{CatalogErrorKind, MovieScoutError, Result};
use std::time::Duration;
use tracing::debug;

/// Blocking client for a TMDB v3 compatible catalog.
///
/// Holds a pre-built reqwest client; cheap to clone per worker thread via
/// the inner connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::blocking::Client,
    api_base: String,
    api_token: Option<String>,
}

impl CatalogClient {
    /// Create a client from catalog configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("movie-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                MovieScoutError::catalog(
                    "building HTTP client",
                    CatalogErrorKind::Network(e.to_string()),
                )
            })?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Issue a GET against a catalog path and decode the search envelope.
    fn get_movies(&self, path: &str, query: &[(&str, &str)], context: &str) -> Result<SearchResponse> {
        let url = format!("{}/{path}", self.api_base);
        debug!(%url, "catalog request");

        let mut request = self
            .client
            .get(&url)
            .query(query)
            .header("accept", "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            MovieScoutError::catalog(context.to_string(), CatalogErrorKind::Network(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MovieScoutError::catalog(
                context.to_string(),
                CatalogErrorKind::Status {
                    code: status.as_u16(),
                    body,
                },
            ));
        }

        let body: SearchResponse = response.json().map_err(|e| {
            MovieScoutError::catalog(
                context.to_string(),
                CatalogErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        if let Some(message) = body.api_failure() {
            return Err(MovieScoutError::catalog(
                context.to_string(),
                CatalogErrorKind::ApiFailure(message),
            ));
        }

        debug!(results = body.results.len(), "catalog response");
        Ok(body)
    }
}

impl MovieCatalog for CatalogClient {
    fn search(&self, query: &str) -> Result<SearchResponse> {
        self.get_movies(
            "search/movie",
            &[("query", query)],
            &format!("searching for \"{query}\""),
        )
    }

    fn discover_popular(&self) -> Result<SearchResponse> {
        self.get_movies(
            "discover/movie",
            &[("sort_by", "popularity.desc")],
            "discovering popular movies",
        )
    }
}
