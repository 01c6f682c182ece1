//! State machine for the interactive browse view.
//!
//! `BrowseApp` owns no I/O at all: keystrokes, timer checks, and fetch
//! results come in as plain method calls and the app answers with the
//! requests it wants issued. The run loop in `ui.rs` and the workers in
//! `fetch.rs` do the actual terminal and network work, which keeps every
//! state transition testable with nothing but a clock value.

use crate::analytics::SearchTermRecord;
use crate::catalog::Movie;
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::debug;

/// Fixed message shown for any transport or HTTP failure. API-level
/// failures show the server-supplied message instead.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching Movies. Please try again later";

/// A movie fetch the run loop should dispatch to a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number; responses carry it back so stale ones can be dropped
    pub seq: u64,
    /// Committed search term; empty means "discover popular"
    pub query: String,
}

/// A search-count recording the run loop should fire and forget.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSearch {
    pub term: String,
    pub movie: Movie,
}

/// Interactive browse state.
pub struct BrowseApp {
    /// Live contents of the search input
    pub search_input: String,
    /// The term whose results are currently shown (None before first commit)
    pub committed_term: Option<String>,
    /// Quiet period after the last keystroke before a search fires
    debounce: Duration,
    /// When the pending input commits; None while no commit is pending
    deadline: Option<Instant>,
    /// Sequence number handed to the next fetch
    next_seq: u64,
    /// Sequence number of the newest dispatched fetch; older responses lose
    latest_seq: u64,
    /// Current result list
    pub movies: Vec<Movie>,
    /// Trending panel contents
    pub trending: Vec<SearchTermRecord>,
    /// A fetch is in flight
    pub is_loading: bool,
    /// Message shown instead of results
    pub error_message: Option<String>,
    /// Selected row in the result list
    pub selected: usize,
    /// Quit flag checked by the run loop
    pub should_quit: bool,
    /// Render tick counter, drives the loading spinner
    pub tick: u64,
}

impl BrowseApp {
    /// Create the app. The debounce deadline starts armed at `now` so the
    /// first timer check commits the empty input and loads popular movies.
    #[must_use]
    pub fn new(debounce: Duration, now: Instant) -> Self {
        Self {
            search_input: String::new(),
            committed_term: None,
            debounce,
            deadline: Some(now),
            next_seq: 0,
            latest_seq: 0,
            movies: Vec::new(),
            trending: Vec::new(),
            is_loading: false,
            error_message: None,
            selected: 0,
            should_quit: false,
            tick: 0,
        }
    }

    /// Append a character to the search input and re-arm the debounce timer.
    pub fn on_char(&mut self, c: char, now: Instant) {
        self.search_input.push(c);
        self.deadline = Some(now + self.debounce);
    }

    /// Remove the last character and re-arm the debounce timer.
    pub fn on_backspace(&mut self, now: Instant) {
        if self.search_input.pop().is_some() {
            self.deadline = Some(now + self.debounce);
        }
    }

    /// Clear the input entirely and re-arm the debounce timer. Returns false
    /// when the input was already empty.
    pub fn clear_input(&mut self, now: Instant) -> bool {
        if self.search_input.is_empty() {
            return false;
        }
        self.search_input.clear();
        self.deadline = Some(now + self.debounce);
        true
    }

    /// True while a commit is pending but not yet due.
    #[must_use]
    pub fn is_debouncing(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Commit the input if its debounce deadline has passed.
    ///
    /// At most one fetch is produced per deadline: committing disarms the
    /// timer until the next keystroke. Only keystrokes arm the timer, so
    /// rapid typing collapses into a single trailing-edge fetch.
    pub fn due_query(&mut self, now: Instant) -> Option<FetchRequest> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        let query = self.search_input.clone();
        self.committed_term = Some(query.clone());
        self.next_seq += 1;
        self.latest_seq = self.next_seq;
        self.is_loading = true;
        self.error_message = None;

        debug!(seq = self.latest_seq, %query, "committing search");
        Some(FetchRequest {
            seq: self.latest_seq,
            query,
        })
    }

    /// Apply a fetch result.
    ///
    /// Responses for anything but the newest dispatched sequence are
    /// discarded outright; a slow early response can never clobber the
    /// results of a later query. On success with a non-empty term and at
    /// least one result, returns the single search-count recording to fire.
    pub fn apply_movies(
        &mut self,
        seq: u64,
        query: &str,
        result: Result<Vec<Movie>>,
    ) -> Option<RecordSearch> {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale response");
            return None;
        }
        self.is_loading = false;

        match result {
            Ok(movies) => {
                self.error_message = None;
                self.selected = 0;
                let record = if query.is_empty() {
                    None
                } else {
                    movies.first().map(|movie| RecordSearch {
                        term: query.to_string(),
                        movie: movie.clone(),
                    })
                };
                self.movies = movies;
                record
            }
            Err(e) => {
                self.movies.clear();
                self.selected = 0;
                self.error_message = Some(user_message(&e));
                None
            }
        }
    }

    /// Apply a trending fetch result. Failures are logged and dropped; the
    /// panel simply stays empty.
    pub fn apply_trending(&mut self, result: Result<Vec<SearchTermRecord>>) {
        match result {
            Ok(records) => self.trending = records,
            Err(e) => debug!("trending fetch failed: {e}"),
        }
    }

    /// Move the result selection down one row.
    pub fn select_next(&mut self) {
        if !self.movies.is_empty() && self.selected + 1 < self.movies.len() {
            self.selected += 1;
        }
    }

    /// Move the result selection up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first result.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last result.
    pub fn select_last(&mut self) {
        self.selected = self.movies.len().saturating_sub(1);
    }

    /// Currently selected movie, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected)
    }
}

/// Map an error to the message shown in the results area. API-level
/// failures pass their message through; everything else collapses to the
/// fixed fetch-error string.
fn user_message(error: &crate::error::MovieScoutError) -> String {
    use crate::error::{CatalogErrorKind, MovieScoutError};

    if let MovieScoutError::Catalog {
        source: CatalogErrorKind::ApiFailure(message),
        ..
    } = error
    {
        message.clone()
    } else {
        FETCH_ERROR_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogErrorKind, MovieScoutError};

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            poster_path: None,
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            original_language: None,
        }
    }

    fn app() -> (BrowseApp, Instant) {
        let now = Instant::now();
        (BrowseApp::new(Duration::from_millis(500), now), now)
    }

    #[test]
    fn test_initial_commit_is_empty_query() {
        let (mut app, now) = app();
        let req = app.due_query(now).expect("initial commit");
        assert_eq!(req.query, "");
        assert!(app.is_loading);
        // Disarmed until the next keystroke
        assert_eq!(app.due_query(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_rapid_typing_commits_once() {
        let (mut app, now) = app();
        app.due_query(now);

        app.on_char('b', now);
        app.on_char('a', now + Duration::from_millis(100));
        app.on_char('t', now + Duration::from_millis(200));

        // Not due yet: 500ms from the LAST keystroke
        assert_eq!(app.due_query(now + Duration::from_millis(650)), None);

        let req = app
            .due_query(now + Duration::from_millis(700))
            .expect("trailing-edge commit");
        assert_eq!(req.query, "bat");
        assert_eq!(app.due_query(now + Duration::from_millis(800)), None);
    }

    #[test]
    fn test_backspace_rearms_timer() {
        let (mut app, now) = app();
        app.due_query(now);

        app.on_char('x', now);
        app.on_backspace(now + Duration::from_millis(400));

        assert_eq!(app.due_query(now + Duration::from_millis(850)), None);
        let req = app
            .due_query(now + Duration::from_millis(900))
            .expect("commit after backspace");
        assert_eq!(req.query, "");
    }

    #[test]
    fn test_stale_response_discarded() {
        let (mut app, mut now) = app();
        app.due_query(now);

        app.on_char('a', now);
        now += Duration::from_millis(600);
        let first = app.due_query(now).unwrap();

        app.on_char('b', now);
        now += Duration::from_millis(600);
        let second = app.due_query(now).unwrap();
        assert!(second.seq > first.seq);

        // The older response arrives late and must be ignored
        let record = app.apply_movies(first.seq, "a", Ok(vec![movie(1, "Alien")]));
        assert_eq!(record, None);
        assert!(app.movies.is_empty());
        assert!(app.is_loading);

        app.apply_movies(second.seq, "ab", Ok(vec![movie(2, "Abyss")]));
        assert_eq!(app.movies.len(), 1);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_success_with_term_yields_one_recording() {
        let (mut app, now) = app();
        app.due_query(now);
        app.on_char('a', now);
        let req = app.due_query(now + Duration::from_secs(1)).unwrap();

        let record = app
            .apply_movies(req.seq, "a", Ok(vec![movie(19995, "Avatar"), movie(2, "Alien")]))
            .expect("one recording");
        assert_eq!(record.term, "a");
        assert_eq!(record.movie.id, 19995);
    }

    #[test]
    fn test_empty_query_never_records() {
        let (mut app, now) = app();
        let req = app.due_query(now).unwrap();
        let record = app.apply_movies(req.seq, "", Ok(vec![movie(1, "Popular")]));
        assert_eq!(record, None);
    }

    #[test]
    fn test_zero_results_never_records() {
        let (mut app, now) = app();
        app.due_query(now);
        app.on_char('z', now);
        let req = app.due_query(now + Duration::from_secs(1)).unwrap();
        let record = app.apply_movies(req.seq, "z", Ok(vec![]));
        assert_eq!(record, None);
        assert!(app.movies.is_empty());
        assert_eq!(app.error_message, None);
    }

    #[test]
    fn test_network_error_shows_fixed_message() {
        let (mut app, now) = app();
        let req = app.due_query(now).unwrap();
        app.apply_movies(
            req.seq,
            "",
            Err(MovieScoutError::catalog(
                "discover",
                CatalogErrorKind::Network("connection refused".to_string()),
            )),
        );
        assert_eq!(app.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_api_failure_shows_server_message() {
        let (mut app, now) = app();
        let req = app.due_query(now).unwrap();
        app.apply_movies(
            req.seq,
            "",
            Err(MovieScoutError::catalog(
                "discover",
                CatalogErrorKind::ApiFailure("Movie not found!".to_string()),
            )),
        );
        assert_eq!(app.error_message.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn test_error_cleared_on_next_commit() {
        let (mut app, mut now) = app();
        let req = app.due_query(now).unwrap();
        app.apply_movies(
            req.seq,
            "",
            Err(MovieScoutError::catalog(
                "discover",
                CatalogErrorKind::Network("down".to_string()),
            )),
        );
        assert!(app.error_message.is_some());

        app.on_char('a', now);
        now += Duration::from_secs(1);
        app.due_query(now).unwrap();
        assert_eq!(app.error_message, None);
    }

    #[test]
    fn test_selection_navigation() {
        let (mut app, now) = app();
        let req = app.due_query(now).unwrap();
        app.apply_movies(
            req.seq,
            "",
            Ok(vec![movie(1, "A"), movie(2, "B"), movie(3, "C")]),
        );

        assert_eq!(app.selected_movie().unwrap().id, 1);
        app.select_next();
        app.select_next();
        app.select_next(); // clamped at the end
        assert_eq!(app.selected_movie().unwrap().id, 3);
        app.select_prev();
        assert_eq!(app.selected_movie().unwrap().id, 2);
    }

    #[test]
    fn test_apply_trending_swallows_errors() {
        let (mut app, _) = app();
        app.trending = vec![];
        app.apply_trending(Err(MovieScoutError::analytics(
            "trending",
            crate::error::AnalyticsErrorKind::NotConfigured,
        )));
        assert!(app.trending.is_empty());
    }

    #[test]
    fn test_clear_input() {
        let (mut app, now) = app();
        app.due_query(now);
        assert!(!app.clear_input(now));

        app.on_char('x', now);
        assert!(app.clear_input(now + Duration::from_millis(100)));
        let req = app.due_query(now + Duration::from_secs(1)).unwrap();
        assert_eq!(req.query, "");
    }
}
