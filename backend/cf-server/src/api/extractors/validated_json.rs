//! JSON body extractor whose rejections use the API error shape

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a missing, malformed, or incomplete body becomes a
/// 422 `VALIDATION_ERROR` instead of axum's plain-text rejection.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ValidatedJson(value)),
                Err(rejection) => Err(ApiError::Validation {
                    message: rejection.body_text(),
                    field: None,
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
