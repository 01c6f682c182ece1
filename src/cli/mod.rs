//! Command implementations behind the binary's subcommands.

use crate::analytics::{AnalyticsClient, TrendingStore};
use crate::catalog::{CatalogClient, Movie, MovieCatalog};
use crate::config::AppConfig;
use crate::error::{MovieScoutError, Result};
use crate::tui::{run_browse_tui, BrowseApp};
use clap::ValueEnum;
use std::time::{Duration, Instant};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Output format for the one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
}

/// Build the optional analytics client: None when the store is not
/// configured, an error only when the client itself cannot be built.
fn analytics_client(config: &AppConfig) -> Result<Option<AnalyticsClient>> {
    if !config.analytics.is_configured() {
        return Ok(None);
    }
    AnalyticsClient::new(&config.analytics).map(Some)
}

/// Run the interactive browse TUI.
pub fn run_browse(config: &AppConfig) -> Result<()> {
    config.validate()?;
    let catalog = CatalogClient::new(&config.catalog)?;
    let store = analytics_client(config)?;

    let mut app = BrowseApp::new(
        Duration::from_millis(config.tui.debounce_ms),
        Instant::now(),
    );
    run_browse_tui(&mut app, &catalog, store.as_ref(), config.tui.trending_limit)?;
    Ok(())
}

/// Run a one-shot search (or popular listing when `query` is empty).
pub fn run_search(
    config: &AppConfig,
    query: &str,
    limit: usize,
    output: OutputFormat,
    no_track: bool,
) -> Result<()> {
    config.validate()?;
    let catalog = CatalogClient::new(&config.catalog)?;

    let response = if query.is_empty() {
        catalog.discover_popular()?
    } else {
        catalog.search(query)?
    };
    let movies: Vec<Movie> = response.results.into_iter().take(limit).collect();

    // Count the search like the interactive view would, best-effort
    if !no_track && !query.is_empty() {
        if let (Some(movie), Some(store)) = (movies.first(), analytics_client(config)?) {
            if let Err(e) = store.record_search(query, movie) {
                warn!("search-count recording failed: {e}");
            }
        }
    }

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&movies).map_err(|e| {
                MovieScoutError::config(format!("failed to serialize results: {e}"))
            })?;
            println!("{json}");
        }
        OutputFormat::Table => print_movie_table(&movies),
    }
    Ok(())
}

/// Print the most-searched terms.
pub fn run_trending(config: &AppConfig, limit: usize, output: OutputFormat) -> Result<()> {
    config.validate()?;
    let Some(store) = analytics_client(config)? else {
        return Err(MovieScoutError::config(
            "analytics store is not configured; set APPWRITE_PROJECT_ID, \
             APPWRITE_DATABASE_ID, and APPWRITE_COLLECTION_ID or the matching \
             config file entries",
        ));
    };

    let records = store.trending(limit)?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records).map_err(|e| {
                MovieScoutError::config(format!("failed to serialize results: {e}"))
            })?;
            println!("{json}");
        }
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No searches recorded yet.");
                return Ok(());
            }
            println!("{:<4} {:<30} {:>8}", "#", "SEARCH TERM", "COUNT");
            for (i, record) in records.iter().enumerate() {
                println!(
                    "{:<4} {:<30} {:>8}",
                    i + 1,
                    record.search_term,
                    record.count
                );
            }
        }
    }
    Ok(())
}

fn print_movie_table(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }
    println!(
        "{:<10} {:<42} {:<6} {:>6} {:>8}",
        "ID", "TITLE", "YEAR", "RATING", "VOTES"
    );
    for movie in movies {
        let title = truncate_title(&movie.title, 40);
        println!(
            "{:<10} {:<42} {:<6} {:>6.1} {:>8}",
            movie.id,
            title,
            movie.release_year().unwrap_or("----"),
            movie.vote_average,
            movie.vote_count
        );
    }
}

/// Cap a title at `max_width` display columns, walking char by char so a
/// multibyte or wide title is never cut mid-character.
fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_title_short_unchanged() {
        assert_eq!(truncate_title("Avatar", 40), "Avatar");
    }

    #[test]
    fn test_truncate_title_long_ascii() {
        let long = "a".repeat(60);
        let out = truncate_title(&long, 40);
        assert_eq!(out.width(), 40);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_title_multibyte() {
        // 60 two-byte chars; byte-index truncation would panic here
        let long = "é".repeat(60);
        let out = truncate_title(&long, 40);
        assert_eq!(out, format!("{}...", "é".repeat(37)));
    }

    #[test]
    fn test_truncate_title_wide_chars() {
        // CJK chars are two columns wide each
        let long = "映".repeat(30);
        let out = truncate_title(&long, 40);
        assert!(out.width() <= 40);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_title_exact_boundary() {
        let exact = "b".repeat(40);
        assert_eq!(truncate_title(&exact, 40), exact);
    }
}
