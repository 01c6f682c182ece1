//! HTTP client for the analytics document store.

use super::documents::{self, DocumentList, SearchTermRecord};
use super::TrendingStore;
use crate::catalog::Movie;
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsErrorKind, MovieScoutError, Result};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Blocking client for an Appwrite-compatible document store.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    project_id: String,
    api_key: Option<String>,
    database_id: String,
    collection_id: String,
}

impl AnalyticsClient {
    /// Create a client from analytics configuration.
    ///
    /// Returns `NotConfigured` when the project, database, or collection id
    /// is missing; callers treat that as "tracking disabled".
    pub fn new(config: &AnalyticsConfig) -> Result<Self> {
        let (Some(project_id), Some(database_id), Some(collection_id)) = (
            config.project_id.clone(),
            config.database_id.clone(),
            config.collection_id.clone(),
        ) else {
            return Err(MovieScoutError::analytics(
                "creating store client",
                AnalyticsErrorKind::NotConfigured,
            ));
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("movie-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                MovieScoutError::analytics(
                    "building HTTP client",
                    AnalyticsErrorKind::Network(e.to_string()),
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id,
            api_key: config.api_key.clone(),
            database_id,
            collection_id,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn apply_headers(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        let mut request = request
            .header("X-Appwrite-Project", &self.project_id)
            .header("content-type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("X-Appwrite-Key", key);
        }
        request
    }

    fn check_status(
        response: reqwest::blocking::Response,
        context: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(MovieScoutError::analytics(
                context.to_string(),
                AnalyticsErrorKind::Status {
                    code: status.as_u16(),
                    body,
                },
            ))
        }
    }

    /// List documents matching the given query strings.
    fn list_documents(&self, queries: &[String], context: &str) -> Result<DocumentList> {
        let url = self.documents_url();
        debug!(%url, ?queries, "store list request");

        let mut request = self.client.get(&url);
        for query in queries {
            request = request.query(&[("queries[]", query)]);
        }

        let response = self.apply_headers(request).send().map_err(|e| {
            MovieScoutError::analytics(
                context.to_string(),
                AnalyticsErrorKind::Network(e.to_string()),
            )
        })?;
        let response = Self::check_status(response, context)?;

        response.json().map_err(|e| {
            MovieScoutError::analytics(
                context.to_string(),
                AnalyticsErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }

    /// Create a fresh counter document with count 1.
    fn create_record(&self, term: &str, movie: &Movie) -> Result<()> {
        let context = "creating search-term record";
        let body = json!({
            "documentId": "unique()",
            "data": {
                "searchTerm": term,
                "count": 1,
                "movie_id": movie.id,
                "poster_url": movie.poster_url().unwrap_or_default(),
            },
        });

        let response = self
            .apply_headers(self.client.post(self.documents_url()))
            .json(&body)
            .send()
            .map_err(|e| {
                MovieScoutError::analytics(context, AnalyticsErrorKind::Network(e.to_string()))
            })?;
        Self::check_status(response, context)?;
        Ok(())
    }

    /// Bump an existing counter document.
    fn increment_record(&self, record: &SearchTermRecord) -> Result<()> {
        let context = "incrementing search-term record";
        let url = format!("{}/{}", self.documents_url(), record.id);
        let body = json!({ "data": { "count": record.count + 1 } });

        let response = self
            .apply_headers(self.client.patch(&url))
            .json(&body)
            .send()
            .map_err(|e| {
                MovieScoutError::analytics(context, AnalyticsErrorKind::Network(e.to_string()))
            })?;
        Self::check_status(response, context)?;
        Ok(())
    }
}

impl TrendingStore for AnalyticsClient {
    // Read-then-write increment; concurrent bumps of the same term can
    // lose an update.
    fn record_search(&self, term: &str, movie: &Movie) -> Result<()> {
        let queries = [documents::equal("searchTerm", term)];
        let existing = self.list_documents(&queries, "looking up search-term record")?;

        match existing.documents.first() {
            Some(record) => self.increment_record(record),
            None => self.create_record(term, movie),
        }
    }

    fn trending(&self, limit: usize) -> Result<Vec<SearchTermRecord>> {
        let queries = [documents::order_desc("count"), documents::limit(limit)];
        let list = self.list_documents(&queries, "fetching trending searches")?;
        Ok(list.documents)
    }
}
