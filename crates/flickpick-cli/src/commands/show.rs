use color_eyre::Result;
use movie_browse_models::MovieDetail;
use movie_browse_omdb::MovieSource;
use owo_colors::OwoColorize;
use serde_json::json;

use super::{star_row, AppContext};
use crate::output::{Output, OutputFormat};

pub async fn run_show(imdb_id: &str, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let client = ctx.client()?;
    let library = ctx.open_library()?;

    let detail = match client.movie_details(imdb_id).await {
        Ok(detail) => detail,
        Err(err) => {
            output.error(err.to_string());
            return Ok(());
        }
    };

    render_detail(&detail, library.rating_for(imdb_id), ctx.config.rating.max, output);
    Ok(())
}

fn render_detail(detail: &MovieDetail, user_rating: Option<u8>, max_rating: u8, output: &Output) {
    match output.format() {
        OutputFormat::Human => {
            output.println(format!("{} ({})", detail.title.bold(), detail.year));
            let runtime = detail
                .runtime_minutes
                .map(|m| format!("{} min", m))
                .unwrap_or_else(|| "runtime unknown".to_string());
            output.println(format!("{} • {}", detail.released, runtime));
            output.println(detail.genre.clone());
            if let Some(rating) = detail.imdb_rating {
                output.println(format!("⭐ {} IMDb rating", rating));
            }
            if let Some(rating) = user_rating {
                output.println(format!(
                    "{} {}/{}  (your rating)",
                    star_row(rating, max_rating).yellow(),
                    rating,
                    max_rating
                ));
            }
            output.println("");
            output.println(detail.plot.italic().to_string());
            output.println(format!("Starring {}", detail.actors));
            output.println(format!("Directed by {}", detail.director));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "detail",
                "movie": detail,
                "user_rating": user_rating,
            }));
        }
    }
}
