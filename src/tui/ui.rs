//! Terminal lifecycle, run loop, and rendering for the browse view.

use super::app::BrowseApp;
use super::events::{AppEvent, EventHandler};
use super::fetch::{spawn_movie_fetch, spawn_record_search, spawn_trending_fetch};
use crate::analytics::AnalyticsClient;
use crate::catalog::{CatalogClient, Movie};
use crossterm::{
    event::{KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, stdout};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Run the browse TUI until the user quits.
pub fn run_browse_tui(
    app: &mut BrowseApp,
    catalog: &CatalogClient,
    store: Option<&AnalyticsClient>,
    trending_limit: usize,
) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();
    spawn_trending_fetch(store, trending_limit, events.sender());

    // Main loop
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    handle_key_event(app, key.code, key.modifiers);
                }
            }
            AppEvent::Resize => {}
            AppEvent::Tick => {
                app.tick += 1;
            }
            AppEvent::Movies { seq, query, result } => {
                if let Some(record) = app.apply_movies(seq, &query, result) {
                    spawn_record_search(store, record);
                }
            }
            AppEvent::Trending(result) => {
                app.apply_trending(result);
            }
        }

        if let Some(request) = app.due_query(Instant::now()) {
            spawn_movie_fetch(catalog, request, events.sender());
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key_event(app: &mut BrowseApp, code: KeyCode, modifiers: KeyModifiers) {
    let now = Instant::now();

    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match code {
        KeyCode::Esc => {
            // Esc clears the input first; a second Esc quits
            if !app.clear_input(now) {
                app.should_quit = true;
            }
        }
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Backspace => app.on_backspace(now),
        KeyCode::Char(c) => app.on_char(c, now),
        _ => {}
    }
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut BrowseApp) {
    let area = frame.area();

    // The trending row is hidden entirely until there is data for it
    let trending_height = if app.trending.is_empty() { 0 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(3),               // Search input
            Constraint::Length(trending_height), // Trending
            Constraint::Min(10),                 // Results
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_search_bar(frame, chunks[1], app);
    if !app.trending.is_empty() {
        render_trending(frame, chunks[2], app);
    }
    render_results(frame, chunks[3], app);
    render_footer(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &BrowseApp) {
    let status = if app.is_loading {
        let frame_idx = (app.tick as usize) % SPINNER_FRAMES.len();
        format!(" {} loading", SPINNER_FRAMES[frame_idx])
    } else {
        String::new()
    };

    let header = Line::from(vec![
        Span::styled(
            " movie-scout ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(status, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &BrowseApp) {
    let title = if app.search_input.is_empty() {
        "Search (popular movies shown)"
    } else {
        "Search"
    };

    let input = Paragraph::new(app.search_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    // Cursor after the typed text, clamped to the inner width
    let text_width = u16::try_from(app.search_input.width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(text_width)
        .min(area.x + area.width.saturating_sub(2));
    frame.set_cursor_position((x, area.y + 1));
}

fn render_trending(frame: &mut Frame, area: Rect, app: &BrowseApp) {
    let mut spans = Vec::new();
    for (i, record) in app.trending.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}.", i + 1),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::raw(format!(" {} ", record.search_term)));
        spans.push(Span::styled(
            format!("({})", record.count),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let line = Line::from(spans);

    let trending = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("Trending searches"));
    frame.render_widget(trending, area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &mut BrowseApp) {
    if let Some(message) = &app.error_message {
        let error = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
        frame.render_widget(error, area);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .map(|movie| {
            let year = movie.release_year().unwrap_or("----");
            let line = Line::from(vec![
                Span::raw(movie.title.clone()),
                Span::styled(
                    format!("  ({year})  ★ {:.1}", movie.vote_average),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!("Results ({})", app.movies.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.movies.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, halves[0], &mut state);

    render_detail(frame, halves[1], app.selected_movie());
}

fn render_detail(frame: &mut Frame, area: Rect, movie: Option<&Movie>) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let Some(movie) = movie else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Released: {}    Language: {}",
            movie.release_date.as_deref().unwrap_or("unknown"),
            movie.original_language.as_deref().unwrap_or("unknown"),
        )),
        Line::from(format!(
            "Rating: {:.1} ({} votes)    Popularity: {:.1}",
            movie.vote_average, movie.vote_count, movie.popularity
        )),
    ];
    if let Some(url) = movie.poster_url() {
        lines.push(Line::from(Span::styled(
            url,
            Style::default().fg(Color::Blue),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(movie.overview.clone()));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(detail, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " type to search  ↑/↓ select  Esc clear/quit  Ctrl+C quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
