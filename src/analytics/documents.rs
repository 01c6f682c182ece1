//! Document model and query strings for the analytics store.

use serde::{Deserialize, Serialize};

/// One per-search-term counter document.
///
/// Field names follow the store's collection schema, including the
/// `$id` system attribute and the camelCase `searchTerm` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTermRecord {
    /// Store-assigned document id
    #[serde(rename = "$id")]
    pub id: String,
    /// The exact search term, as typed
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// How many times this term has been searched
    pub count: u64,
    /// Catalog id of the first result seen for this term
    pub movie_id: u64,
    /// Poster URL of that first result (may be empty)
    #[serde(default)]
    pub poster_url: String,
}

/// List envelope returned by the store's document-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub documents: Vec<SearchTermRecord>,
}

/// Build an `equal` filter query string for a single string value.
#[must_use]
pub fn equal(attribute: &str, value: &str) -> String {
    format!("equal(\"{attribute}\", [\"{}\"])", escape(value))
}

/// Build a descending-order query string.
#[must_use]
pub fn order_desc(attribute: &str) -> String {
    format!("orderDesc(\"{attribute}\")")
}

/// Build a result-limit query string.
#[must_use]
pub fn limit(n: usize) -> String {
    format!("limit({n})")
}

/// Escape a string value for embedding inside a query literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
