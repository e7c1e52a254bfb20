use crate::{
    change_password, clear_history, forgot_password, get_history, health, login, predict, signup,
};

use cf_service::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Accounts
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/change-password", post(change_password))
        // History
        .route("/history/{username}", get(get_history))
        .route("/history/clear/{username}", delete(clear_history))
        // Prediction
        .route("/predict", post(predict))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}
