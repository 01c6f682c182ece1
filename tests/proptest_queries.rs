//! Property tests for query-string escaping and poster URLs.

use movie_scout::analytics::equal;
use movie_scout::catalog::Movie;
use movie_scout::config::IMAGE_BASE_URL;
use proptest::prelude::*;

/// Undo the escaping `equal` applies, for round-trip checking.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn equal_query_wraps_and_escapes_any_term(term in ".*") {
        let query = equal("searchTerm", &term);

        prop_assert!(query.starts_with(r#"equal("searchTerm", [""#));
        prop_assert!(query.ends_with(r#""])"#));

        // The embedded value contains no bare quote that would close the
        // literal early
        let inner = &query[r#"equal("searchTerm", [""#.len()..query.len() - r#""])"#.len()];
        let mut prev_backslash = false;
        for c in inner.chars() {
            if c == '"' {
                prop_assert!(prev_backslash, "unescaped quote in {query}");
            }
            prev_backslash = c == '\\' && !prev_backslash;
        }

        prop_assert_eq!(unescape(inner), term);
    }

    #[test]
    fn poster_url_is_prefix_plus_path(path in "/[a-zA-Z0-9]{1,20}\\.jpg") {
        let movie = Movie {
            id: 1,
            title: "T".to_string(),
            overview: String::new(),
            poster_path: Some(path.clone()),
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            original_language: None,
        };
        let url = movie.poster_url().unwrap();
        prop_assert_eq!(url, format!("{IMAGE_BASE_URL}{path}"));
    }
}
