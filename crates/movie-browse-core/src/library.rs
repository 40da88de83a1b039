use movie_browse_models::WatchedMovie;
use thiserror::Error;
use tracing::info;

use crate::store::{StoreError, WatchedStore};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{0} is already in the watched list")]
    AlreadyWatched(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The watched list plus its backing store. Every mutation rewrites the
/// store before returning.
pub struct WatchedLibrary {
    store: WatchedStore,
    movies: Vec<WatchedMovie>,
}

impl WatchedLibrary {
    pub fn open(store: WatchedStore) -> Result<Self, LibraryError> {
        let movies = store.load()?;
        Ok(Self { store, movies })
    }

    pub fn movies(&self) -> &[WatchedMovie] {
        &self.movies
    }

    pub fn is_watched(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }

    pub fn rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.movies
            .iter()
            .find(|m| m.imdb_id == imdb_id)
            .map(|m| m.user_rating)
    }

    /// At most one entry per imdb id.
    pub fn add(&mut self, movie: WatchedMovie) -> Result<(), LibraryError> {
        if self.is_watched(&movie.imdb_id) {
            return Err(LibraryError::AlreadyWatched(movie.imdb_id));
        }
        info!("Adding {} ({}) to watched list", movie.title, movie.imdb_id);
        self.movies.push(movie);
        self.store.save(&self.movies)?;
        Ok(())
    }

    /// Returns true if an entry was removed. Order of the remaining
    /// entries is preserved.
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool, LibraryError> {
        let before = self.movies.len();
        self.movies.retain(|m| m.imdb_id != imdb_id);
        if self.movies.len() == before {
            return Ok(false);
        }
        info!("Removed {} from watched list", imdb_id);
        self.store.save(&self.movies)?;
        Ok(true)
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.movies.len(),
            avg_imdb_rating: average(self.movies.iter().map(|m| m.imdb_rating.unwrap_or(0.0) as f64)),
            avg_user_rating: average(self.movies.iter().map(|m| m.user_rating as f64)),
            avg_runtime_minutes: average(
                self.movies
                    .iter()
                    .map(|m| m.runtime_minutes.unwrap_or(0) as f64),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

/// Fold-from-zero mean: the empty list averages to 0.0.
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
