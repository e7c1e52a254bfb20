//! Prediction history REST API handlers

use crate::{ApiResult, HistoryRecord, OptionalBearer};

use cf_service::{Ack, AppState};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /history/{username}
///
/// Newest first; an unknown username yields an empty list
pub async fn get_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
    OptionalBearer(authorization): OptionalBearer,
) -> ApiResult<Json<Vec<HistoryRecord>>> {
    state.authorize_history(&username, authorization.as_deref())?;

    let entries = state.history_service().list(&username).await?;

    Ok(Json(entries.into_iter().map(HistoryRecord::from).collect()))
}

/// DELETE /history/clear/{username}
pub async fn clear_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
    OptionalBearer(authorization): OptionalBearer,
) -> ApiResult<Json<Ack>> {
    state.authorize_history(&username, authorization.as_deref())?;

    let ack = state.history_service().clear(&username).await?;

    Ok(Json(ack))
}
