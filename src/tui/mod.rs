//! Interactive movie browser.
//!
//! Debounced search-as-you-type over the catalog with a trending panel fed
//! by the analytics store. State lives in [`BrowseApp`]; rendering and
//! terminal handling in `ui`; network work on worker threads in `fetch`.

mod app;
mod events;
mod fetch;
mod ui;

pub use app::{BrowseApp, FetchRequest, RecordSearch, FETCH_ERROR_MESSAGE};
pub use events::{AppEvent, EventHandler};
pub use ui::run_browse_tui;
