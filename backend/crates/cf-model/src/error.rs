use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read artifact {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to parse artifact {path}: {source} {location}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid artifact: {message} {location}")]
    InvalidArtifact {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot encode '{value}' for column '{column}' {location}")]
    Encoding {
        column: String,
        value: String,
        location: ErrorLocation,
    },

    #[error("Model produced a non-finite value {location}")]
    NonFinite { location: ErrorLocation },
}

impl ModelError {
    #[track_caller]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for failures caused by the request row rather than the artifacts
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
