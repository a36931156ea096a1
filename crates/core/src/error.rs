//! Error types for the bench map core

use thiserror::Error;

/// Main error type for data loading and extraction
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("No valid bench records in input")]
    NoBenches,
}

/// Result type alias for bench map operations
pub type Result<T> = std::result::Result<T, Error>;
