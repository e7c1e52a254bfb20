use crate::{AuthService, HistoryService, PredictionService, Result, ServiceError};

use cf_auth::{JwtValidator, PasswordHasher, TokenIssuer};
use cf_model::PredictionPipeline;

use std::sync::Arc;

use log::debug;
use sqlx::SqlitePool;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub hasher: Arc<PasswordHasher>,
    /// `None` when the artifacts failed to load at startup
    pub pipeline: Option<Arc<PredictionPipeline>>,
    pub require_token_for_history: bool,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        jwt_secret: &[u8],
        token_expiry_minutes: u32,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            pool,
            token_issuer: Arc::new(TokenIssuer::with_hs256(jwt_secret, token_expiry_minutes)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            hasher: Arc::new(hasher),
            pipeline: None,
            require_token_for_history: false,
        }
    }

    pub fn with_pipeline(mut self, pipeline: Option<PredictionPipeline>) -> Self {
        self.pipeline = pipeline.map(Arc::new);
        self
    }

    pub fn with_require_token_for_history(mut self, required: bool) -> Self {
        self.require_token_for_history = required;
        self
    }

    pub fn model_loaded(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(
            self.pool.clone(),
            Arc::clone(&self.token_issuer),
            Arc::clone(&self.hasher),
        )
    }

    pub fn history_service(&self) -> HistoryService {
        HistoryService::new(self.pool.clone())
    }

    pub fn prediction_service(&self) -> PredictionService {
        PredictionService::new(self.pipeline.clone(), self.history_service())
    }

    /// Gate for a user's history. A no-op unless token enforcement is on, in
    /// which case the bearer token's subject must be `username`.
    pub fn authorize_history(&self, username: &str, authorization: Option<&str>) -> Result<()> {
        if !self.require_token_for_history {
            return Ok(());
        }

        let header = authorization.ok_or_else(|| ServiceError::unauthorized("Not authenticated"))?;
        let claims = self.jwt_validator.validate_bearer(header).map_err(|e| {
            debug!("Rejected history token: {}", e);
            ServiceError::unauthorized("Could not validate credentials")
        })?;

        if claims.sub != username {
            return Err(ServiceError::forbidden("Token does not grant access to this user"));
        }

        Ok(())
    }
}
