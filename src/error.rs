//! Error types for the NBA stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Stats API returned no data")]
    NoData,

    #[error("Invalid season token: {token}")]
    InvalidSeason { token: String },

    #[error("Result set not found in response: {name}")]
    MissingResultSet { name: String },

    #[error("Column {column} not found in result set {result_set}")]
    MissingColumn { column: String, result_set: String },
}
