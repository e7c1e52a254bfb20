//! Account REST API handlers

use crate::{
    ApiResult, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, SignupRequest,
    ValidatedJson,
};

use cf_service::{Ack, AppState, TokenBundle};

use axum::{Json, extract::State};

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<TokenBundle>> {
    let bundle = state
        .auth_service()
        .signup(&req.name, &req.username, &req.email, &req.password)
        .await?;

    Ok(Json(bundle))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenBundle>> {
    let bundle = state.auth_service().login(&req.email, &req.password).await?;

    Ok(Json(bundle))
}

/// POST /forgot-password
///
/// Unauthenticated: knowing an account's email and username is enough to
/// overwrite its password.
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ForgotPasswordRequest>,
) -> ApiResult<Json<Ack>> {
    let ack = state
        .auth_service()
        .forgot_password(&req.email, &req.username, &req.new_password)
        .await?;

    Ok(Json(ack))
}

/// POST /change-password
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<Ack>> {
    let ack = state
        .auth_service()
        .change_password(&req.username, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ack))
}
