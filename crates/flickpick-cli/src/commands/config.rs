use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_browse_config::CredentialStore;
use serde_json::json;

use super::{prompts, AppContext};
use crate::output::{Output, OutputFormat};

pub fn run_show(full: bool, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut credentials = CredentialStore::new(ctx.paths.credentials_file());
    credentials.load()?;

    let api_key = credentials.get_omdb_api_key().cloned();
    let displayed_key = match (&api_key, full) {
        (None, _) => "(not set)".to_string(),
        (Some(key), true) => key.clone(),
        (Some(key), false) => mask(key),
    };

    match output.format() {
        OutputFormat::Human => {
            output.println(format!("Config file: {}", ctx.paths.config_file().display()));
            output.println(format!("OMDb API URL: {}", ctx.config.omdb.api_url));
            output.println(format!("OMDb API key: {}", displayed_key));
            output.println(format!(
                "Minimum query length: {}",
                ctx.config.search.min_query_length
            ));
            output.println(format!("Maximum star rating: {}", ctx.config.rating.max));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "config",
                "omdb_api_url": ctx.config.omdb.api_url,
                "omdb_api_key": displayed_key,
                "min_query_length": ctx.config.search.min_query_length,
                "max_rating": ctx.config.rating.max,
            }));
        }
    }
    Ok(())
}

pub fn run_key(key: Option<String>, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;

    let key = match key {
        Some(key) => key,
        None => prompts::prompt_api_key()?,
    };
    if key.trim().is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    ctx.paths.ensure_directories()?;
    let mut credentials = CredentialStore::new(ctx.paths.credentials_file());
    credentials.load()?;
    credentials.set_omdb_api_key(key.trim().to_string());
    credentials.save()?;

    output.success("OMDb API key saved");
    Ok(())
}

pub fn run_options(
    min_query_length: Option<usize>,
    max_rating: Option<u8>,
    output: &Output,
) -> Result<()> {
    let mut ctx = AppContext::load()?;

    let mut changed = false;
    if let Some(len) = min_query_length {
        ctx.config.search.min_query_length = len;
        changed = true;
    }
    if let Some(max) = max_rating {
        if max < 1 {
            return Err(eyre!("Maximum rating must be at least 1"));
        }
        ctx.config.rating.max = max;
        changed = true;
    }

    if !changed {
        output.warn("Nothing to change. Use --min-query-length or --max-rating.");
        return Ok(());
    }

    ctx.paths.ensure_directories()?;
    ctx.config.save(&ctx.paths.config_file())?;
    output.success("Options saved");
    Ok(())
}

fn mask(key: &str) -> String {
    if key.len() <= 2 {
        return "*".repeat(key.len());
    }
    format!("{}{}", &key[..2], "*".repeat(key.len() - 2))
}
