use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Base-path override, mainly for tests and containers.
pub const BASE_PATH_ENV: &str = "FLICKPICK_BASE_PATH";

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self, ConfigError> {
        let base_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("flickpick");
        Ok(Self::with_base(base_dir))
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join("credentials.toml")
    }

    /// The watched list lives in a single fixed file.
    pub fn watched_file(&self) -> PathBuf {
        self.data_dir.join("watched.json")
    }

    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Ok(base) = std::env::var(BASE_PATH_ENV) {
            return Self::with_base(PathBuf::from(base));
        }
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".flickpick")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_base() {
        let paths = PathManager::with_base(PathBuf::from("/tmp/fp"));

        assert_eq!(paths.config_file(), PathBuf::from("/tmp/fp/config.toml"));
        assert_eq!(
            paths.credentials_file(),
            PathBuf::from("/tmp/fp/credentials.toml")
        );
        assert_eq!(
            paths.watched_file(),
            PathBuf::from("/tmp/fp/data/watched.json")
        );
    }
}
