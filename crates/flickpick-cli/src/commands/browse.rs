use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use console::{Key, Term};
use movie_browse_core::{SearchSession, SearchState, StarRating, WatchedLibrary};
use movie_browse_models::{MovieDetail, WatchedMovie};
use movie_browse_omdb::MovieSource;
use owo_colors::OwoColorize;
use tokio::sync::mpsc;

use super::{star_row, AppContext};
use crate::output::{Output, OutputFormat};

const RESULT_ROWS: usize = 10;

enum View {
    Results,
    Details {
        detail: MovieDetail,
        rating: StarRating,
        notice: Option<String>,
    },
}

/// Deferred view transition, applied after the key match releases its
/// borrow of the current view.
enum Transition {
    Stay,
    Quit,
    OpenDetails(String),
    CloseDetails,
}

pub async fn run_browse(output: &Output) -> Result<()> {
    if output.format() != OutputFormat::Human {
        return Err(eyre!(
            "browse is interactive; use `flickpick search` for machine-readable output"
        ));
    }

    let ctx = AppContext::load()?;
    let source: Arc<dyn MovieSource> = Arc::new(ctx.client()?);
    let library = ctx.open_library()?;

    let term = Term::stdout();
    term.hide_cursor()?;
    let result = browse_loop(&term, &ctx, source, library).await;
    term.show_cursor()?;
    term.set_title("");
    result
}

async fn browse_loop(
    term: &Term,
    ctx: &AppContext,
    source: Arc<dyn MovieSource>,
    mut library: WatchedLibrary,
) -> Result<()> {
    let max_rating = ctx.config.rating.max;
    let (mut session, mut updates) =
        SearchSession::with_min_query_len(source.clone(), ctx.config.search.min_query_length);

    let mut state = SearchState::default();
    let mut query = String::new();
    let mut cursor = 0usize;
    let mut status: Option<String> = None;
    let mut view = View::Results;
    let mut keys = spawn_key_reader();

    loop {
        render(term, &query, &state, cursor, &view, &library, max_rating, &status)?;

        tokio::select! {
            Some(update) = updates.recv() => {
                state.apply(update);
                cursor = cursor.min(state.movies.len().saturating_sub(1));
            }
            Some(key) = keys.recv() => {
                let transition = match &mut view {
                    View::Results => handle_results_key(
                        key,
                        &mut query,
                        &mut cursor,
                        &mut status,
                        &state,
                        &mut session,
                    ),
                    View::Details { detail, rating, notice } => handle_details_key(
                        key,
                        detail,
                        rating,
                        notice,
                        &mut library,
                        &mut status,
                        max_rating,
                    )?,
                };

                match transition {
                    Transition::Stay => {}
                    Transition::Quit => break,
                    Transition::OpenDetails(imdb_id) => {
                        match source.movie_details(&imdb_id).await {
                            Ok(detail) => {
                                term.set_title(format!("Movie | {}", detail.title));
                                view = View::Details {
                                    detail,
                                    rating: StarRating::new(max_rating),
                                    notice: None,
                                };
                            }
                            Err(err) => {
                                status = Some(err.to_string());
                            }
                        }
                    }
                    Transition::CloseDetails => {
                        term.set_title("flickpick");
                        view = View::Results;
                    }
                }
            }
            else => break,
        }
    }

    term.clear_screen()?;
    Ok(())
}

fn handle_results_key(
    key: Key,
    query: &mut String,
    cursor: &mut usize,
    status: &mut Option<String>,
    state: &SearchState,
    session: &mut SearchSession,
) -> Transition {
    match key {
        Key::Char(c) if !c.is_control() => {
            query.push(c);
            *status = None;
            session.submit(query);
        }
        Key::Backspace => {
            query.pop();
            session.submit(query);
        }
        Key::ArrowUp => {
            *cursor = cursor.saturating_sub(1);
        }
        Key::ArrowDown => {
            if *cursor + 1 < state.movies.len() {
                *cursor += 1;
            }
        }
        Key::Enter => {
            if let Some(movie) = state.movies.get(*cursor) {
                return Transition::OpenDetails(movie.imdb_id.clone());
            }
        }
        // Esc clears the query; on an empty query it quits.
        Key::Escape => {
            if query.is_empty() {
                return Transition::Quit;
            }
            query.clear();
            *cursor = 0;
            session.submit(query);
        }
        _ => {}
    }
    Transition::Stay
}

fn handle_details_key(
    key: Key,
    detail: &MovieDetail,
    rating: &mut StarRating,
    notice: &mut Option<String>,
    library: &mut WatchedLibrary,
    status: &mut Option<String>,
    max_rating: u8,
) -> Result<Transition> {
    match key {
        Key::ArrowLeft => {
            rating.hover(rating.display_value().saturating_sub(1).max(1));
        }
        Key::ArrowRight => {
            rating.hover((rating.display_value() + 1).min(max_rating));
        }
        Key::Char(c) if c.is_ascii_digit() => {
            // '0' means 10 on a ten-star row
            let level = if c == '0' { 10 } else { c as u8 - b'0' };
            rating.hover(level);
        }
        Key::Enter => {
            rating.select_preview();
        }
        Key::Char('a') => {
            if library.is_watched(&detail.imdb_id) {
                *notice = Some("Already in the watched list".to_string());
            } else if let Some(committed) = rating.value() {
                let movie = WatchedMovie::from_detail(detail, committed, rating.revisions());
                match library.add(movie) {
                    Ok(()) => {
                        *status = Some(format!(
                            "Added {} ({}/{})",
                            detail.title, committed, max_rating
                        ));
                        return Ok(Transition::CloseDetails);
                    }
                    Err(err) => {
                        *notice = Some(err.to_string());
                    }
                }
            } else {
                *notice = Some("Rate the movie first (Enter commits)".to_string());
            }
        }
        Key::Char('x') => {
            if library.remove(&detail.imdb_id)? {
                *notice = Some("Removed from the watched list".to_string());
            }
        }
        Key::Escape | Key::Backspace => {
            return Ok(Transition::CloseDetails);
        }
        _ => {}
    }
    Ok(Transition::Stay)
}

fn spawn_key_reader() -> mpsc::UnboundedReceiver<Key> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let term = Term::stdout();
        while let Ok(key) = term.read_key() {
            if tx.send(key).is_err() {
                break;
            }
        }
    });
    rx
}

#[allow(clippy::too_many_arguments)]
fn render(
    term: &Term,
    query: &str,
    state: &SearchState,
    cursor: usize,
    view: &View,
    library: &WatchedLibrary,
    max_rating: u8,
    status: &Option<String>,
) -> Result<()> {
    let mut screen = String::new();
    screen.push_str(&format!("🍿 {}\n\n", "flickpick".bold()));

    match view {
        View::Results => {
            screen.push_str(&format!("Search movies: {}▌\n", query));

            if state.is_loading {
                screen.push_str("Loading...\n");
            } else if let Some(error) = &state.error {
                screen.push_str(&format!("{} {}\n", "⚠".yellow(), error));
            } else if !state.movies.is_empty() {
                screen.push_str(&format!("Found {} results\n", state.movies.len()));
            }
            screen.push('\n');

            let offset = cursor.saturating_sub(RESULT_ROWS - 1);
            for (idx, movie) in state.movies.iter().enumerate().skip(offset).take(RESULT_ROWS) {
                let watched = if library.is_watched(&movie.imdb_id) { " ✓" } else { "" };
                let row = format!("{} ({}){}", movie.title, movie.year, watched);
                if idx == cursor {
                    screen.push_str(&format!("> {}\n", row.bold()));
                } else {
                    screen.push_str(&format!("  {}\n", row));
                }
            }

            if let Some(status) = status {
                screen.push_str(&format!("\n{}\n", status));
            }
            screen.push_str("\ntype to search · ↑/↓ select · Enter details · Esc clear/quit\n");
        }
        View::Details { detail, rating, notice } => {
            screen.push_str(&format!("{} ({})\n", detail.title.bold(), detail.year));
            let runtime = detail
                .runtime_minutes
                .map(|m| format!("{} min", m))
                .unwrap_or_else(|| "runtime unknown".to_string());
            screen.push_str(&format!("{} • {}\n", detail.released, runtime));
            screen.push_str(&format!("{}\n", detail.genre));
            if let Some(imdb) = detail.imdb_rating {
                screen.push_str(&format!("⭐ {} IMDb rating\n", imdb));
            }
            screen.push('\n');

            if let Some(existing) = library.rating_for(&detail.imdb_id) {
                screen.push_str(&format!(
                    "You rated this movie with {} ⭐  {}\n",
                    existing,
                    star_row(existing, max_rating).yellow()
                ));
            } else {
                let shown = rating.display_value();
                screen.push_str(&format!(
                    "{} {:2}/{}",
                    star_row(shown, max_rating).yellow(),
                    shown,
                    max_rating
                ));
                if let Some(committed) = rating.value() {
                    screen.push_str(&format!("  rated: {}", committed.to_string().bold()));
                }
                screen.push('\n');
            }
            screen.push('\n');

            screen.push_str(&format!("{}\n", detail.plot.italic()));
            screen.push_str(&format!("Starring {}\n", detail.actors));
            screen.push_str(&format!("Directed by {}\n", detail.director));

            if let Some(notice) = notice {
                screen.push_str(&format!("\n{}\n", notice));
            }
            screen.push_str("\n←/→ preview · Enter rate · a add · x remove · Esc back\n");
        }
    }

    term.clear_screen()?;
    term.write_str(&screen)?;
    Ok(())
}
