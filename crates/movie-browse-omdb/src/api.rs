use movie_browse_models::{MovieDetail, MovieSummary};
use serde::Deserialize;

use crate::error::SourceError;

// OMDb API base URL
pub const API_BASE: &str = "http://www.omdbapi.com/";

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSearchResult>>,
    #[serde(rename = "Error")]
    #[allow(dead_code)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResult {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
}

/// Parse a search response body. `Response: "False"` is the API's
/// not-found sentinel and never yields a result list.
pub fn parse_search_response(body: &str) -> Result<Vec<MovieSummary>, SourceError> {
    let parsed: OmdbSearchResponse = serde_json::from_str(body)?;

    if parsed.response != "True" {
        return Err(SourceError::NotFound);
    }

    let results = parsed
        .search
        .unwrap_or_default()
        .into_iter()
        .map(|r| MovieSummary {
            imdb_id: r.imdb_id,
            title: r.title,
            year: r.year,
            poster: r.poster,
        })
        .collect();

    Ok(results)
}

pub fn parse_detail_response(body: &str) -> Result<MovieDetail, SourceError> {
    let parsed: OmdbDetailResponse = serde_json::from_str(body)?;

    if parsed.response != "True" {
        return Err(SourceError::NotFound);
    }

    Ok(MovieDetail {
        imdb_id: parsed.imdb_id.unwrap_or_default(),
        title: parsed.title.unwrap_or_default(),
        year: parsed.year.unwrap_or_default(),
        poster: parsed.poster.unwrap_or_default(),
        runtime_minutes: parsed.runtime.as_deref().and_then(parse_runtime_minutes),
        imdb_rating: parsed.imdb_rating.as_deref().and_then(parse_imdb_rating),
        plot: parsed.plot.unwrap_or_default(),
        released: parsed.released.unwrap_or_default(),
        actors: parsed.actors.unwrap_or_default(),
        director: parsed.director.unwrap_or_default(),
        genre: parsed.genre.unwrap_or_default(),
    })
}

/// "148 min" -> 148. "N/A" and anything unparseable -> None.
fn parse_runtime_minutes(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

fn parse_imdb_rating(rating: &str) -> Option<f32> {
    rating.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://example.com/inception.jpg"},
                {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let results = parse_search_response(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].imdb_id, "tt1375666");
        assert_eq!(results[0].title, "Inception");
        assert_eq!(results[0].year, "2010");
    }

    #[test]
    fn test_parse_search_response_not_found() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let err = parse_search_response(body).unwrap_err();
        assert!(matches!(err, SourceError::NotFound));
        assert_eq!(err.to_string(), "Movie not found");
    }

    #[test]
    fn test_parse_search_response_malformed() {
        let err = parse_search_response("not json").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_parse_detail_response() {
        let body = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets.",
            "Poster": "https://example.com/inception.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;

        let detail = parse_detail_response(body).unwrap();
        assert_eq!(detail.imdb_id, "tt1375666");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.director, "Christopher Nolan");
    }

    #[test]
    fn test_parse_detail_response_not_found() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;

        let err = parse_detail_response(body).unwrap_err();
        assert!(matches!(err, SourceError::NotFound));
    }

    #[test]
    fn test_parse_runtime_tolerates_na() {
        assert_eq!(parse_runtime_minutes("148 min"), Some(148));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }

    #[test]
    fn test_parse_rating_tolerates_na() {
        assert_eq!(parse_imdb_rating("8.8"), Some(8.8));
        assert_eq!(parse_imdb_rating("N/A"), None);
    }
}
