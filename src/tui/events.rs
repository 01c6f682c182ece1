//! Event plumbing for the browse view.
//!
//! Terminal input, the render tick, and fetch results from worker threads
//! all fan into one mpsc channel, so the run loop is a single `recv` loop
//! with no locking.

use crate::analytics::SearchTermRecord;
use crate::catalog::Movie;
use crate::error::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Everything the run loop can wake up on.
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// A catalog fetch finished. `seq` and `query` echo the request.
    Movies {
        seq: u64,
        query: String,
        result: Result<Vec<Movie>>,
    },
    /// A trending fetch finished.
    Trending(Result<Vec<SearchTermRecord>>),
}

/// Owns the input thread and the channel workers report into.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }
}

impl EventHandler {
    /// Block until the next event.
    pub fn next(&self) -> io::Result<AppEvent> {
        self.rx.recv().map_err(io::Error::other)
    }

    /// A sender handle for worker threads.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
