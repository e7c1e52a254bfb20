use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_EXPIRY_MINUTES, MAX_TOKEN_EXPIRY_MINUTES,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_EXPIRY_MINUTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for issued access tokens
    pub jwt_secret: Option<String>,
    pub token_expiry_minutes: u32,
    /// When set, history reads/clears and the predict history write require a
    /// bearer token whose subject is the username being acted on
    pub require_token_for_history: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_expiry_minutes: DEFAULT_TOKEN_EXPIRY_MINUTES,
            require_token_for_history: false,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.jwt_secret.as_deref() else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set CF_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_EXPIRY_MINUTES..=MAX_TOKEN_EXPIRY_MINUTES)
            .contains(&self.token_expiry_minutes)
        {
            return Err(ConfigError::auth(format!(
                "auth.token_expiry_minutes must be {}-{}, got {}",
                MIN_TOKEN_EXPIRY_MINUTES, MAX_TOKEN_EXPIRY_MINUTES, self.token_expiry_minutes
            )));
        }

        Ok(())
    }
}
