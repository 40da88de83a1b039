use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::MovieDetail;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub imdb_rating: Option<f32>,
    pub runtime_minutes: Option<u32>,
    /// Personal rating, 1-10.
    pub user_rating: u8,
    /// How many times the rating was changed before the movie was added.
    pub rating_revisions: u32,
    pub date_added: DateTime<Utc>,
}

impl WatchedMovie {
    pub fn from_detail(detail: &MovieDetail, user_rating: u8, rating_revisions: u32) -> Self {
        Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster: detail.poster.clone(),
            imdb_rating: detail.imdb_rating,
            runtime_minutes: detail.runtime_minutes,
            user_rating,
            rating_revisions,
            date_added: Utc::now(),
        }
    }
}
