//! Error types for clearway

use thiserror::Error;

use crate::Dimension;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Starting location and destination cannot be the same")]
    InvalidLocationPair,

    #[error("Entered data is not valid: no route from '{start}' to '{destination}'")]
    InvalidLocationValue { start: String, destination: String },

    #[error("Vehicle {dimension} must be a positive number, got {value}")]
    InvalidVehicleDimension { dimension: Dimension, value: f64 },

    #[error("Invalid segment {index} of {path} ({corridor}): {reason}")]
    InvalidSegment {
        corridor: String,
        path: String,
        index: usize,
        reason: String,
    },
}

impl Error {
    /// True for errors caused by the request rather than the route data or environment
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidLocationPair
                | Error::InvalidLocationValue { .. }
                | Error::InvalidVehicleDimension { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
