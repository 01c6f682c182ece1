//! Configuration types for movie-scout.
//!
//! All remote endpoints and UI tunables live in one explicitly constructed
//! struct that is passed into the clients at startup; nothing reads the
//! environment implicitly at request time.

use crate::error::{MovieScoutError, Result};
use serde::{Deserialize, Serialize};

/// Default movie catalog API base URL (TMDB v3).
pub const DEFAULT_CATALOG_API_BASE: &str = "https://api.themoviedb.org/3";

/// Default analytics document store endpoint (Appwrite cloud).
pub const DEFAULT_STORE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Fixed image host prefix for poster URLs.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Unified application configuration, loadable from a YAML file with
/// environment and CLI layering on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Movie catalog API settings
    pub catalog: CatalogConfig,
    /// Analytics document store settings
    pub analytics: AnalyticsConfig,
    /// Interactive browse-mode settings
    pub tui: TuiConfig,
}

/// Movie catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    pub api_base: String,
    /// Bearer token. A missing token does not fail at startup; requests
    /// fail at runtime with an HTTP auth error.
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_CATALOG_API_BASE.to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

/// Analytics document store configuration.
///
/// The store is optional: when `is_configured` is false, search counting and
/// the trending panel are disabled rather than issuing doomed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Store endpoint URL
    pub endpoint: String,
    /// Store project id
    pub project_id: Option<String>,
    /// Store API key (server-side key; optional for public collections)
    pub api_key: Option<String>,
    /// Database id holding the search-term collection
    pub database_id: Option<String>,
    /// Collection id of the search-term records
    pub collection_id: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STORE_ENDPOINT.to_string(),
            project_id: None,
            api_key: None,
            database_id: None,
            collection_id: None,
            timeout_secs: 30,
        }
    }
}

impl AnalyticsConfig {
    /// True when every setting needed to address the collection is present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.project_id.is_some() && self.database_id.is_some() && self.collection_id.is_some()
    }
}

/// Interactive browse-mode configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
    /// Number of entries in the trending panel
    pub trending_limit: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            trending_limit: 5,
        }
    }
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay recognized environment variables onto this config.
    ///
    /// File settings lose to the environment; CLI flags are layered on top
    /// of both by the caller.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("TMDB_API_TOKEN") {
            self.catalog.api_token = Some(token);
        }
        if let Ok(endpoint) = std::env::var("APPWRITE_ENDPOINT") {
            self.analytics.endpoint = endpoint;
        }
        if let Ok(project) = std::env::var("APPWRITE_PROJECT_ID") {
            self.analytics.project_id = Some(project);
        }
        if let Ok(key) = std::env::var("APPWRITE_API_KEY") {
            self.analytics.api_key = Some(key);
        }
        if let Ok(db) = std::env::var("APPWRITE_DATABASE_ID") {
            self.analytics.database_id = Some(db);
        }
        if let Ok(col) = std::env::var("APPWRITE_COLLECTION_ID") {
            self.analytics.collection_id = Some(col);
        }
    }

    /// Merge another config into this one, with `other` taking precedence
    /// for any value it sets away from the default.
    pub fn merge(&mut self, other: &Self) {
        if other.catalog.api_base != DEFAULT_CATALOG_API_BASE {
            self.catalog.api_base.clone_from(&other.catalog.api_base);
        }
        if other.catalog.api_token.is_some() {
            self.catalog.api_token.clone_from(&other.catalog.api_token);
        }
        if other.catalog.timeout_secs != 30 {
            self.catalog.timeout_secs = other.catalog.timeout_secs;
        }

        if other.analytics.endpoint != DEFAULT_STORE_ENDPOINT {
            self.analytics.endpoint.clone_from(&other.analytics.endpoint);
        }
        if other.analytics.project_id.is_some() {
            self.analytics.project_id.clone_from(&other.analytics.project_id);
        }
        if other.analytics.api_key.is_some() {
            self.analytics.api_key.clone_from(&other.analytics.api_key);
        }
        if other.analytics.database_id.is_some() {
            self.analytics.database_id.clone_from(&other.analytics.database_id);
        }
        if other.analytics.collection_id.is_some() {
            self.analytics
                .collection_id
                .clone_from(&other.analytics.collection_id);
        }
        if other.analytics.timeout_secs != 30 {
            self.analytics.timeout_secs = other.analytics.timeout_secs;
        }

        if other.tui.debounce_ms != 500 {
            self.tui.debounce_ms = other.tui.debounce_ms;
        }
        if other.tui.trending_limit != 5 {
            self.tui.trending_limit = other.tui.trending_limit;
        }
    }

    /// Reject nonsensical values. A missing catalog token is deliberately
    /// NOT an error here: the request fails at runtime instead.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.api_base.is_empty() {
            return Err(MovieScoutError::config("catalog.api_base must not be empty"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(MovieScoutError::config("catalog.timeout_secs must be > 0"));
        }
        if self.analytics.timeout_secs == 0 {
            return Err(MovieScoutError::config("analytics.timeout_secs must be > 0"));
        }
        if self.tui.trending_limit == 0 {
            return Err(MovieScoutError::config("tui.trending_limit must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.api_base, DEFAULT_CATALOG_API_BASE);
        assert_eq!(config.tui.debounce_ms, 500);
        assert_eq!(config.tui.trending_limit, 5);
        assert!(!config.analytics.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_analytics_is_configured() {
        let mut analytics = AnalyticsConfig::default();
        assert!(!analytics.is_configured());

        analytics.project_id = Some("proj".to_string());
        analytics.database_id = Some("db".to_string());
        assert!(!analytics.is_configured());

        analytics.collection_id = Some("metrics".to_string());
        assert!(analytics.is_configured());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = AppConfig::default();
        config.catalog.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.tui.trending_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_overrides_non_defaults() {
        let mut base = AppConfig::default();
        let mut overrides = AppConfig::default();
        overrides.catalog.api_token = Some("token".to_string());
        overrides.tui.debounce_ms = 250;

        base.merge(&overrides);
        assert_eq!(base.catalog.api_token.as_deref(), Some("token"));
        assert_eq!(base.tui.debounce_ms, 250);
        // Untouched values keep the base
        assert_eq!(base.tui.trending_limit, 5);
    }
}
