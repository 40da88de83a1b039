use async_trait::async_trait;
use movie_browse_models::{MovieDetail, MovieSummary};

use crate::error::SourceError;

/// A remote movie database. The one real implementation is [`crate::OmdbClient`];
/// tests drive the search session with mocks.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Free-text title search.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, SourceError>;

    /// Full record for a single title.
    async fn movie_details(&self, imdb_id: &str) -> Result<MovieDetail, SourceError>;
}
