use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use indicatif::{ProgressBar, ProgressStyle};
use movie_browse_core::{SearchSession, SearchState, SearchUpdate};
use movie_browse_models::MovieSummary;
use movie_browse_omdb::MovieSource;
use serde_json::json;

use super::AppContext;
use crate::output::{Output, OutputFormat};

pub async fn run_search(query: &str, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let source: Arc<dyn MovieSource> = Arc::new(ctx.client()?);

    let (mut session, mut updates) =
        SearchSession::with_min_query_len(source, ctx.config.search.min_query_length);

    let spinner = search_spinner(output, query);
    session.submit(query);

    // One-shot: fold updates until the query settles.
    let mut state = SearchState::default();
    while let Some(update) = updates.recv().await {
        let settled = !matches!(update, SearchUpdate::Started { .. });
        state.apply(update);
        if settled {
            break;
        }
    }

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Some(message) = &state.error {
        output.error(message);
        return Ok(());
    }

    if state.movies.is_empty() {
        output.warn(format!(
            "No results. Queries need at least {} characters.",
            ctx.config.search.min_query_length
        ));
        return Ok(());
    }

    render_results(&state.movies, output);
    Ok(())
}

fn search_spinner(output: &Output, query: &str) -> Option<ProgressBar> {
    if output.format() != OutputFormat::Human || output.is_quiet() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Searching for \"{}\"...", query));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

pub(crate) fn render_results(movies: &[MovieSummary], output: &Output) {
    match output.format() {
        OutputFormat::Human => {
            output.println(format!("Found {} results", movies.len()));
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["Title", "Year", "IMDb ID"]);
            for movie in movies {
                table.add_row(vec![&movie.title, &movie.year, &movie.imdb_id]);
            }
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "results",
                "count": movies.len(),
                "movies": movies,
            }));
        }
    }
}
