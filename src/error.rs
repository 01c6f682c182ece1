//! Unified error types for movie-scout.
//!
//! Each remote collaborator (the movie catalog and the analytics document
//! store) gets its own error-kind enum; the top-level error carries a short
//! context string describing what the caller was doing.

use thiserror::Error;

/// Main error type for movie-scout operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MovieScoutError {
    /// Errors talking to the movie catalog API
    #[error("Catalog request failed: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors talking to the analytics document store
    #[error("Analytics store request failed: {context}")]
    Analytics {
        context: String,
        #[source]
        source: AnalyticsErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// The catalog answered 200 but the body flags a logical failure
    /// (`Response: false`). The message is server-supplied or a fixed
    /// fallback.
    #[error("API failure: {0}")]
    ApiFailure(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Specific analytics store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalyticsErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Analytics store is not configured")]
    NotConfigured,
}

/// Convenient Result type for movie-scout operations
pub type Result<T> = std::result::Result<T, MovieScoutError>;

impl MovieScoutError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an analytics error with context
    pub fn analytics(context: impl Into<String>, source: AnalyticsErrorKind) -> Self {
        Self::Analytics {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True if this error is an API-level logical failure from the catalog
    /// (as opposed to a transport or HTTP-status failure).
    #[must_use]
    pub const fn is_api_failure(&self) -> bool {
        matches!(
            self,
            Self::Catalog {
                source: CatalogErrorKind::ApiFailure(_),
                ..
            }
        )
    }
}

impl From<std::io::Error> for MovieScoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{err}"),
            source: err,
        }
    }
}
