//! Carbon footprint prediction handler

use crate::{ApiResult, OptionalBearer, PredictRequest, PredictResponse, ValidatedJson};

use cf_service::AppState;

use axum::{Json, extract::State};

/// POST /predict
///
/// When `user_id` names an existing account the result is also recorded in
/// that account's history. Under token enforcement a `user_id` must be
/// backed by a matching bearer token.
pub async fn predict(
    State(state): State<AppState>,
    OptionalBearer(authorization): OptionalBearer,
    ValidatedJson(req): ValidatedJson<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let username = req.user_id.as_deref().filter(|name| !name.is_empty());

    if let Some(username) = username {
        state.authorize_history(username, authorization.as_deref())?;
    }

    let value = state
        .prediction_service()
        .predict(&req.features, username)
        .await?;

    Ok(Json(PredictResponse {
        predicted_carbon_footprint: value,
    }))
}
