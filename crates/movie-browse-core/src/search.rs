use std::sync::Arc;

use movie_browse_models::MovieSummary;
use movie_browse_omdb::MovieSource;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug)]
pub enum SearchUpdate {
    /// Query was too short; results and error are cleared.
    Cleared { query: String },
    /// A request for this query is in flight.
    Started { query: String },
    Results {
        query: String,
        movies: Vec<MovieSummary>,
    },
    Failed { query: String, message: String },
}

impl SearchUpdate {
    pub fn query(&self) -> &str {
        match self {
            SearchUpdate::Cleared { query }
            | SearchUpdate::Started { query }
            | SearchUpdate::Results { query, .. }
            | SearchUpdate::Failed { query, .. } => query,
        }
    }
}

/// Issues at most one request at a time: submitting a new query cancels the
/// outstanding one, and a cancelled request emits nothing. Cancellation is
/// never surfaced as an error.
pub struct SearchSession {
    source: Arc<dyn MovieSource>,
    min_query_len: usize,
    in_flight: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<SearchUpdate>,
}

impl SearchSession {
    pub fn new(source: Arc<dyn MovieSource>) -> (Self, mpsc::UnboundedReceiver<SearchUpdate>) {
        Self::with_min_query_len(source, MIN_QUERY_LEN)
    }

    pub fn with_min_query_len(
        source: Arc<dyn MovieSource>,
        min_query_len: usize,
    ) -> (Self, mpsc::UnboundedReceiver<SearchUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                source,
                min_query_len,
                in_flight: None,
                tx,
            },
            rx,
        )
    }

    /// Replace the current query. The previous request, if still pending, is
    /// cancelled before anything else happens.
    pub fn submit(&mut self, query: &str) {
        self.cancel();

        if query.chars().count() < self.min_query_len {
            let _ = self.tx.send(SearchUpdate::Cleared {
                query: query.to_string(),
            });
            return;
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let _ = self.tx.send(SearchUpdate::Started {
            query: query.to_string(),
        });

        let source = self.source.clone();
        let tx = self.tx.clone();
        let query = query.to_string();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Search for {:?} superseded", query);
                }
                result = source.search_movies(&query) => {
                    let update = match result {
                        Ok(movies) => SearchUpdate::Results { query, movies },
                        Err(err) => SearchUpdate::Failed { query, message: err.to_string() },
                    };
                    let _ = tx.send(update);
                }
            }
        });
    }

    /// Cancel the in-flight request without submitting a new query.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// What the UI renders: current query, results, loading flag, error line.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub movies: Vec<MovieSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    /// Fold one update into the state. Results and failures carry the query
    /// that produced them; anything from a query that is no longer current
    /// is dropped, so a stale response can never overwrite newer state.
    pub fn apply(&mut self, update: SearchUpdate) {
        match update {
            SearchUpdate::Cleared { query } => {
                self.query = query;
                self.movies.clear();
                self.is_loading = false;
                self.error = None;
            }
            SearchUpdate::Started { query } => {
                self.query = query;
                self.is_loading = true;
                self.error = None;
            }
            SearchUpdate::Results { query, movies } => {
                if query != self.query {
                    return;
                }
                self.movies = movies;
                self.is_loading = false;
                self.error = None;
            }
            SearchUpdate::Failed { query, message } => {
                if query != self.query {
                    return;
                }
                self.is_loading = false;
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use movie_browse_models::MovieDetail;
    use movie_browse_omdb::SourceError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    fn summary(imdb_id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            year: "2020".to_string(),
            poster: "N/A".to_string(),
        }
    }

    /// Source where one query can be held back until the test releases it.
    struct MockSource {
        calls: AtomicUsize,
        held_query: Option<String>,
        release: Notify,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                held_query: None,
                release: Notify::new(),
            }
        }

        fn holding(query: &str) -> Self {
            Self {
                held_query: Some(query.to_string()),
                ..Self::new()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MovieSource for MockSource {
        async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.held_query.as_deref() == Some(query) {
                self.release.notified().await;
            }
            if query == "missing" {
                return Err(SourceError::NotFound);
            }
            Ok(vec![summary("tt0000001", query)])
        }

        async fn movie_details(&self, _imdb_id: &str) -> Result<MovieDetail, SourceError> {
            unimplemented!("not used by session tests")
        }
    }

    async fn drain(
        rx: &mut mpsc::UnboundedReceiver<SearchUpdate>,
        state: &mut SearchState,
    ) {
        while let Ok(Some(update)) = timeout(Duration::from_millis(200), rx.recv()).await {
            state.apply(update);
        }
    }

    #[tokio::test]
    async fn test_short_query_skips_network() {
        let source = Arc::new(MockSource::new());
        let (mut session, mut rx) = SearchSession::new(source.clone());
        let mut state = SearchState::default();

        session.submit("in");
        drain(&mut rx, &mut state).await;

        assert_eq!(source.call_count(), 0);
        assert!(state.movies.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_qualifying_query_returns_results() {
        let source = Arc::new(MockSource::new());
        let (mut session, mut rx) = SearchSession::new(source.clone());
        let mut state = SearchState::default();

        session.submit("inception");
        drain(&mut rx, &mut state).await;

        assert_eq!(source.call_count(), 1);
        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.movies[0].title, "inception");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_not_found_surfaces_message() {
        let source = Arc::new(MockSource::new());
        let (mut session, mut rx) = SearchSession::new(source.clone());
        let mut state = SearchState::default();

        session.submit("missing");
        drain(&mut rx, &mut state).await;

        assert!(state.movies.is_empty());
        assert_eq!(state.error.as_deref(), Some("Movie not found"));
    }

    #[tokio::test]
    async fn test_superseded_query_is_cancelled() {
        let source = Arc::new(MockSource::holding("first"));
        let (mut session, mut rx) = SearchSession::new(source.clone());
        let mut state = SearchState::default();

        session.submit("first");
        // Let the first request start before superseding it.
        tokio::task::yield_now().await;
        session.submit("second");

        // Releasing the held request now must not produce a stale update.
        source.release.notify_waiters();
        drain(&mut rx, &mut state).await;

        assert_eq!(state.query, "second");
        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.movies[0].title, "second");
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_stale_update_never_overwrites_newer_state() {
        // Even if a stale result sneaks into the channel, the reducer drops
        // it because the query no longer matches.
        let mut state = SearchState::default();
        state.apply(SearchUpdate::Started {
            query: "second".to_string(),
        });
        state.apply(SearchUpdate::Results {
            query: "first".to_string(),
            movies: vec![summary("tt0000001", "first")],
        });

        assert!(state.movies.is_empty());
        assert!(state.is_loading);

        state.apply(SearchUpdate::Failed {
            query: "first".to_string(),
            message: "Movie not found".to_string(),
        });
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_shrinking_query_clears_results() {
        let source = Arc::new(MockSource::new());
        let (mut session, mut rx) = SearchSession::new(source.clone());
        let mut state = SearchState::default();

        session.submit("inception");
        drain(&mut rx, &mut state).await;
        assert_eq!(state.movies.len(), 1);

        session.submit("in");
        drain(&mut rx, &mut state).await;
        assert!(state.movies.is_empty());
        assert_eq!(source.call_count(), 1);
    }
}
