use crate::ApiError;

use cf_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_detail_and_error() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "User not found");
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_422_with_field() {
    let error = ApiError::Validation {
        message: "email must not be empty".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_conflict_from_service_returns_400() {
    let error = ApiError::from(ServiceError::conflict("Username already taken", "username"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Username already taken");
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_invalid_credentials_from_service_returns_401() {
    let error = ApiError::from(ServiceError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], "Incorrect email or password");
}

#[tokio::test]
async fn test_incorrect_password_from_service_returns_400() {
    let error = ApiError::from(ServiceError::IncorrectPassword {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Incorrect current password");
}

#[tokio::test]
async fn test_model_unavailable_returns_500_with_dedicated_code() {
    let error = ApiError::from(ServiceError::ModelUnavailable {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Model files not loaded");
    assert_eq!(json["error"]["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn test_forbidden_from_service_returns_403() {
    let error = ApiError::from(ServiceError::forbidden("Token does not grant access to this user"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_errors_hide_details() {
    let error = ApiError::from(ServiceError::from(cf_db::DbError::Migration {
        message: "checksum mismatch for 20260101000001".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["detail"].as_str().unwrap().contains("checksum"));
}
