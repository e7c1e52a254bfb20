use cf_auth::AuthError;
use cf_db::DbError;
use cf_model::ModelError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";
pub const INCORRECT_CURRENT_PASSWORD: &str = "Incorrect current password";
pub const MODEL_NOT_LOADED: &str = "Model files not loaded";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Incorrect current password {location}")]
    IncorrectPassword { location: ErrorLocation },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Prediction model unavailable {location}")]
    ModelUnavailable { location: ErrorLocation },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Model error: {source} {location}")]
    Model {
        #[source]
        source: ModelError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn conflict(message: impl Into<String>, field: &str) -> Self {
        Self::Conflict {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text safe to show a client. Wrapped lower-layer errors collapse to a
    /// generic message.
    pub fn client_message(&self) -> String {
        match self {
            Self::Conflict { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. } => message.clone(),
            Self::InvalidCredentials { .. } => INCORRECT_CREDENTIALS.to_string(),
            Self::IncorrectPassword { .. } => INCORRECT_CURRENT_PASSWORD.to_string(),
            Self::ModelUnavailable { .. } => MODEL_NOT_LOADED.to_string(),
            Self::Database { .. }
            | Self::Auth { .. }
            | Self::Model { .. }
            | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ServiceError {
    #[track_caller]
    fn from(source: ModelError) -> Self {
        Self::Model {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    #[track_caller]
    fn from(source: tokio::task::JoinError) -> Self {
        Self::Internal {
            message: format!("blocking task failed: {}", source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
