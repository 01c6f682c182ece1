//! Search-count analytics.
//!
//! Every successful non-empty search bumps a per-term counter document in a
//! remote store; the counters feed the trending panel. Failures here must
//! never surface to the user: callers log and drop them, since tracking is
//! strictly best-effort.

mod client;
mod documents;

pub use client::AnalyticsClient;
pub use documents::{equal, limit, order_desc, DocumentList, SearchTermRecord};

use crate::catalog::Movie;
use crate::error::Result;

/// Search-count persistence operations.
pub trait TrendingStore: Send + Sync {
    /// Count one search for `term`. `movie` is the first result of that
    /// search and is only stored when the term is seen for the first time.
    fn record_search(&self, term: &str, movie: &Movie) -> Result<()>;

    /// The most-searched terms, highest count first, at most `limit` entries.
    fn trending(&self, limit: usize) -> Result<Vec<SearchTermRecord>>;
}
