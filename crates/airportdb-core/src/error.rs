// crates/airportdb-core/src/error.rs

//! Error types shared by every engine in the crate.

use thiserror::Error;

/// Errors produced while loading the dataset or answering a query.
#[derive(Debug, Error)]
pub enum AirportError {
    /// An input code does not have the shape its kind requires.
    #[error("Invalid {kind} format: '{value}' does not match {pattern}")]
    Format {
        kind: &'static str,
        pattern: &'static str,
        value: String,
    },

    /// A well-formed key matched zero records.
    #[error("No data found for {kind}: {code}")]
    NotFound { kind: &'static str, code: String },

    /// A non-code input violates a precondition.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A batch operation could not resolve one or more codes.
    #[error("Could not resolve airport codes: {}", .0.join(", "))]
    Unresolved(Vec<String>),

    /// The dataset resource itself is missing.
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, AirportError>;

impl AirportError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        AirportError::Validation(msg.into())
    }

    /// True for the "zero matches" outcome, as opposed to malformed input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AirportError::NotFound { .. })
    }
}
