use std::sync::Arc;

use async_trait::async_trait;
use movie_browse_models::{MovieDetail, MovieSummary};
use reqwest::Client;
use tracing::debug;

use crate::api;
use crate::error::SourceError;
use crate::traits::MovieSource;

#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, api::API_BASE.to_string())
    }

    /// Point the client at a different endpoint (used by tests against a
    /// local stub server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url,
        }
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(SourceError::Fetch)?;

        let response = response.error_for_status().map_err(SourceError::Fetch)?;

        response.text().await.map_err(SourceError::Fetch)
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, SourceError> {
        debug!("Searching OMDb for {:?}", query);
        let body = self.get(&[("s", query)]).await?;
        api::parse_search_response(&body)
    }

    async fn movie_details(&self, imdb_id: &str) -> Result<MovieDetail, SourceError> {
        debug!("Fetching OMDb details for {}", imdb_id);
        let body = self.get(&[("i", imdb_id)]).await?;
        api::parse_detail_response(&body)
    }
}
