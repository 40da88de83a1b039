use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use console::Term;
use movie_browse_models::WatchedMovie;
use movie_browse_omdb::MovieSource;
use serde_json::json;

use super::{prompts, AppContext};
use crate::output::{Output, OutputFormat};

pub fn run_list(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let library = ctx.open_library()?;
    let summary = library.summary();

    match output.format() {
        OutputFormat::Human => {
            if library.movies().is_empty() {
                output.println("Nothing watched yet. Try `flickpick browse`.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["Title", "Year", "IMDb", "Yours", "Runtime", "IMDb ID"]);
            for movie in library.movies() {
                table.add_row(vec![
                    movie.title.clone(),
                    movie.year.clone(),
                    movie
                        .imdb_rating
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    movie.user_rating.to_string(),
                    movie
                        .runtime_minutes
                        .map(|m| format!("{} min", m))
                        .unwrap_or_else(|| "-".to_string()),
                    movie.imdb_id.clone(),
                ]);
            }
            output.println(table.to_string());
            output.println(format!(
                "#{} movies  ⭐ {:.2}  🌟 {:.2}  ⏳ {:.0} min",
                summary.count,
                summary.avg_imdb_rating,
                summary.avg_user_rating,
                summary.avg_runtime_minutes
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "watched",
                "movies": library.movies(),
                "summary": {
                    "count": summary.count,
                    "avg_imdb_rating": summary.avg_imdb_rating,
                    "avg_user_rating": summary.avg_user_rating,
                    "avg_runtime_minutes": summary.avg_runtime_minutes,
                },
            }));
        }
    }
    Ok(())
}

pub async fn run_add(imdb_id: &str, rating: Option<u8>, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let client = ctx.client()?;
    let mut library = ctx.open_library()?;

    if library.is_watched(imdb_id) {
        output.warn(format!("{} is already in the watched list", imdb_id));
        return Ok(());
    }

    let detail = match client.movie_details(imdb_id).await {
        Ok(detail) => detail,
        Err(err) => {
            output.error(err.to_string());
            return Ok(());
        }
    };

    let max = ctx.config.rating.max;
    let (user_rating, revisions) = match rating {
        Some(r) => {
            if r < 1 || r > max {
                return Err(eyre!("Rating must be between 1 and {}", max));
            }
            (r, 1)
        }
        None => {
            output.println(format!("{} ({})", detail.title, detail.year));
            let term = Term::stdout();
            match prompts::prompt_star_rating(&term, max)? {
                Some(choice) => choice,
                None => {
                    output.println("Cancelled");
                    return Ok(());
                }
            }
        }
    };

    let movie = WatchedMovie::from_detail(&detail, user_rating, revisions);
    library.add(movie)?;
    output.success(format!(
        "Added {} to the watched list with rating {}/{}",
        detail.title, user_rating, max
    ));
    Ok(())
}

pub fn run_remove(imdb_id: &str, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut library = ctx.open_library()?;

    if library.remove(imdb_id)? {
        output.success(format!("Removed {} from the watched list", imdb_id));
    } else {
        output.warn(format!("{} is not in the watched list", imdb_id));
    }
    Ok(())
}
