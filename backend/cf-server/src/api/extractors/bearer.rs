//! Optional `Authorization` header extractor

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

/// Raw `Authorization` header value, if present and valid UTF-8.
/// Validation is left to the service layer, which only checks it when
/// token enforcement is enabled.
pub struct OptionalBearer(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalBearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let value = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            Ok(OptionalBearer(value))
        }
    }
}
