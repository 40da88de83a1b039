use movie_browse_models::WatchedMovie;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access watched list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize watched list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One fixed JSON file holding the whole watched list. Read once at
/// startup, rewritten in full on every mutation.
pub struct WatchedStore {
    path: PathBuf,
}

impl WatchedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<WatchedMovie>, StoreError> {
        if !self.path.exists() {
            debug!("No watched list at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Vec<WatchedMovie>>(&content) {
            Ok(movies) => {
                debug!("Loaded {} watched movies from {:?}", movies.len(), self.path);
                Ok(movies)
            }
            Err(e) => {
                warn!(
                    "Watched list at {:?} is corrupt: {}. Deleting and starting empty.",
                    self.path, e
                );
                if let Err(rm_err) = std::fs::remove_file(&self.path) {
                    warn!("Failed to delete corrupt watched list: {}", rm_err);
                }
                Ok(Vec::new())
            }
        }
    }

    pub fn save(&self, movies: &[WatchedMovie]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(movies)?;
        std::fs::write(&self.path, json)?;
        debug!("Saved {} watched movies to {:?}", movies.len(), self.path);
        Ok(())
    }

    pub fn clear(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn watched(imdb_id: &str, title: &str) -> WatchedMovie {
        WatchedMovie {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            year: "2020".to_string(),
            poster: "N/A".to_string(),
            imdb_rating: Some(7.5),
            runtime_minutes: Some(120),
            user_rating: 8,
            rating_revisions: 1,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchedStore::new(dir.path().join("watched.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_appends_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchedStore::new(dir.path().join("watched.json"));

        let mut movies = vec![watched("tt001", "First")];
        store.save(&movies).unwrap();

        movies.push(watched("tt002", "Second"));
        store.save(&movies).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].imdb_id, "tt001");
        assert_eq!(loaded[1].imdb_id, "tt002");
    }

    #[test]
    fn test_corrupt_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watched.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let store = WatchedStore::new(path.clone());
        assert!(store.load().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watched.json");
        let store = WatchedStore::new(path.clone());

        store.save(&[watched("tt001", "First")]).unwrap();
        assert!(store.clear().unwrap());
        assert!(!path.exists());
        assert!(!store.clear().unwrap());
    }
}
