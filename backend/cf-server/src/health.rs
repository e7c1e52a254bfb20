use cf_service::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - component status
///
/// Always 200 while the process can answer; `status` is "degraded" when the
/// database is unreachable or the model is not loaded.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = cf_db::check_health(&state.pool).await.is_ok();
    let model_loaded = state.model_loaded();

    let health = json!({
        "status": if database_ok && model_loaded { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
            "model": if model_loaded { "loaded" } else { "not_loaded" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; 503 until the database answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match cf_db::check_health(&state.pool).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
