pub mod browse;
pub mod clear;
pub mod config;
pub mod prompts;
pub mod search;
pub mod show;
pub mod watched;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_browse_config::{Config, CredentialStore, PathManager};
use movie_browse_core::{WatchedLibrary, WatchedStore};
use movie_browse_omdb::OmdbClient;
use tracing::debug;

/// Config, paths, and the lazily-built pieces every command needs.
pub(crate) struct AppContext {
    pub config: Config,
    pub paths: PathManager,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config = Config::load(&paths.config_file())?;
        debug!("Loaded config from {:?}", paths.config_file());
        Ok(Self { config, paths })
    }

    pub fn client(&self) -> Result<OmdbClient> {
        let mut credentials = CredentialStore::new(self.paths.credentials_file());
        credentials.load()?;
        let api_key = credentials
            .get_omdb_api_key()
            .ok_or_else(|| eyre!("No OMDb API key configured. Run `flickpick config key` first."))?;
        Ok(OmdbClient::with_base_url(
            api_key.clone(),
            self.config.omdb.api_url.clone(),
        ))
    }

    pub fn open_library(&self) -> Result<WatchedLibrary> {
        let store = WatchedStore::new(self.paths.watched_file());
        Ok(WatchedLibrary::open(store)?)
    }
}

/// "★★★★★★★☆☆☆" for 7 of 10.
pub(crate) fn star_row(filled: u8, max: u8) -> String {
    let mut row = String::new();
    for level in 1..=max {
        row.push(if level <= filled { '★' } else { '☆' });
    }
    row
}
