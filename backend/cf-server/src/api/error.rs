//! REST API error types
//!
//! Every failure renders as `{"detail": message, "error": {code, message, field?}}`.
//! `detail` is what the existing web client reads.

use cf_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub detail: String,
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending request field, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or incomplete request body (422)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Username or email already registered (400)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Prediction artifacts were not loaded at startup (500)
    #[error("Model unavailable: {message} {location}")]
    ModelUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::ModelUnavailable { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::ModelUnavailable { .. } => "MODEL_UNAVAILABLE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (message, field) = match self {
            Self::Validation { message, field, .. } | Self::Conflict { message, field, .. } => {
                (message, field)
            }
            Self::NotFound { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::BadRequest { message, .. }
            | Self::ModelUnavailable { message, .. }
            | Self::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            detail: message.clone(),
            error: ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = e.client_message();

        match e {
            ServiceError::Conflict { field, .. } => ApiError::Conflict {
                message,
                field,
                location,
            },
            ServiceError::InvalidCredentials { .. } | ServiceError::Unauthorized { .. } => {
                ApiError::Unauthorized { message, location }
            }
            ServiceError::IncorrectPassword { .. } | ServiceError::BadRequest { .. } => {
                ApiError::BadRequest { message, location }
            }
            ServiceError::NotFound { .. } => ApiError::NotFound { message, location },
            ServiceError::Forbidden { .. } => ApiError::Forbidden { message, location },
            ServiceError::Validation { field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::ModelUnavailable { .. } => {
                ApiError::ModelUnavailable { message, location }
            }
            ServiceError::Database { .. }
            | ServiceError::Auth { .. }
            | ServiceError::Model { .. }
            | ServiceError::Internal { .. } => {
                // Internals stay in the log, not the response
                log::error!("{}", e);
                ApiError::Internal { message, location }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
