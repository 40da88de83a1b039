use serde::{Deserialize, Serialize};

/// One row of a search response. Fields carry the API's values verbatim;
/// `year` stays a string because OMDb reports ranges like "2012–2015".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f32>,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}
