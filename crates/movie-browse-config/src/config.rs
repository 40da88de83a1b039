use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write config: {0}")]
    Write(#[from] toml::ser::Error),
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub rating: RatingOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Queries shorter than this are cleared instead of sent.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingOptions {
    #[serde(default = "default_max_rating")]
    pub max: u8,
}

fn default_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_min_query_length() -> usize {
    3
}

fn default_max_rating() -> u8 {
    10
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
        }
    }
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            max: default_max_rating(),
        }
    }
}

impl Config {
    /// Missing file is not an error: defaults apply until something is saved.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.omdb.api_url, "http://www.omdbapi.com/");
        assert_eq!(config.search.min_query_length, 3);
        assert_eq!(config.rating.max, 10);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.search.min_query_length = 2;
        config.rating.max = 5;
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.search.min_query_length, 2);
        assert_eq!(reloaded.rating.max, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nmin_query_length = 4\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.search.min_query_length, 4);
        assert_eq!(config.rating.max, 10);
    }
}
