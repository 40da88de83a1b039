use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure or a non-2xx status.
    #[error("Something went wrong with fetching movies")]
    Fetch(#[source] reqwest::Error),

    /// The API answered `Response: "False"`.
    #[error("Movie not found")]
    NotFound,

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}
