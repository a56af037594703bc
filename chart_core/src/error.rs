//! Error types for chart persistence

use thiserror::Error;

/// Errors raised while reading or writing a persisted chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to access chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse chart JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported multiplier {0} (expected 0, 0.5, 1 or 2)")]
    InvalidMultiplier(f64),
    #[error("Malformed matchup key: {0}")]
    MalformedKey(String),
    #[error("Matchup record has an empty type name")]
    EmptyTypeName,
}
