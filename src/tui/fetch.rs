//! Background workers for the browse view.
//!
//! Each fetch runs on its own short-lived thread with a cloned blocking
//! client and reports back through the event channel. Disconnected sends
//! just mean the view already shut down.

use super::app::{FetchRequest, RecordSearch};
use super::events::AppEvent;
use crate::analytics::{AnalyticsClient, TrendingStore};
use crate::catalog::{CatalogClient, MovieCatalog};
use std::sync::mpsc;
use std::thread;
use tracing::debug;

/// Run one committed query on a worker thread.
pub fn spawn_movie_fetch(
    catalog: &CatalogClient,
    request: FetchRequest,
    tx: mpsc::Sender<AppEvent>,
) {
    let catalog = catalog.clone();
    thread::spawn(move || {
        let FetchRequest { seq, query } = request;
        let result = if query.is_empty() {
            catalog.discover_popular()
        } else {
            catalog.search(&query)
        }
        .map(|response| response.results);

        let _ = tx.send(AppEvent::Movies { seq, query, result });
    });
}

/// Load the trending panel on a worker thread. `store` is None when the
/// analytics store is not configured; the panel then stays empty.
pub fn spawn_trending_fetch(
    store: Option<&AnalyticsClient>,
    limit: usize,
    tx: mpsc::Sender<AppEvent>,
) {
    let Some(store) = store else {
        return;
    };
    let store = store.clone();
    thread::spawn(move || {
        let _ = tx.send(AppEvent::Trending(store.trending(limit)));
    });
}

/// Record one search count, fire and forget. Tracking failures must never
/// reach the user, so errors are logged at debug and dropped here.
pub fn spawn_record_search(store: Option<&AnalyticsClient>, record: RecordSearch) {
    let Some(store) = store else {
        return;
    };
    let store = store.clone();
    thread::spawn(move || {
        if let Err(e) = store.record_search(&record.term, &record.movie) {
            debug!(term = %record.term, "search-count recording failed: {e}");
        }
    });
}
