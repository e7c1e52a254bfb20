use crate::{
    Ack, MAX_PASSWORD_LENGTH, PASSWORD_CHANGED, PASSWORD_UPDATED, Result, ServiceError,
    validate_field, validate_password,
};

use cf_auth::{PasswordHasher, TokenIssuer};
use cf_core::{ErrorLocation, NewUser, User};
use cf_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const USERNAME_TAKEN: &str = "Username already taken";
pub const EMAIL_TAKEN: &str = "Email already registered";
pub const NO_MATCHING_ACCOUNT: &str = "No account found with this Email and Username";
pub const USER_NOT_FOUND: &str = "User not found";

/// Issued on signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub token_type: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

pub struct AuthService {
    pool: SqlitePool,
    token_issuer: Arc<TokenIssuer>,
    hasher: Arc<PasswordHasher>,
}

impl AuthService {
    pub fn new(
        pool: SqlitePool,
        token_issuer: Arc<TokenIssuer>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            pool,
            token_issuer,
            hasher,
        }
    }

    pub async fn signup(
        &self,
        name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<TokenBundle> {
        validate_field("name", name)?;
        validate_field("username", username)?;
        validate_field("email", email)?;
        validate_password("password", password)?;

        let hashed_password = self.hash_password(password).await?;

        // Take the write lock up front so the lookups below cannot go stale
        // before the insert
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        if UserRepository::find_by_username(&mut *tx, username).await?.is_some() {
            return Err(ServiceError::conflict(USERNAME_TAKEN, "username"));
        }
        if UserRepository::find_by_email(&mut *tx, email).await?.is_some() {
            return Err(ServiceError::conflict(EMAIL_TAKEN, "email"));
        }

        let new_user = NewUser::new(
            name.to_string(),
            username.to_string(),
            email.to_string(),
            hashed_password,
        );
        let user = UserRepository::create(&mut *tx, &new_user).await?;

        tx.commit().await?;

        info!("Registered user {} (id {})", user.username, user.id);
        self.token_bundle(&user)
    }

    /// Every credential mismatch, blank fields included, is the same 401
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenBundle> {
        // Signup never stores a password this long
        if password.len() > MAX_PASSWORD_LENGTH {
            debug!("Login rejected: password exceeds {} bytes", MAX_PASSWORD_LENGTH);
            return Err(invalid_credentials());
        }

        let Some(user) = UserRepository::find_by_email(&self.pool, email).await? else {
            debug!("Login rejected: no account for email");
            return Err(invalid_credentials());
        };

        if !self.verify_password(password, &user.hashed_password).await? {
            debug!("Login rejected: password mismatch for {}", user.username);
            return Err(invalid_credentials());
        }

        self.token_bundle(&user)
    }

    /// Unauthenticated reset keyed on email plus username. Anyone who knows
    /// both can take over the account.
    pub async fn forgot_password(
        &self,
        email: &str,
        username: &str,
        new_password: &str,
    ) -> Result<Ack> {
        validate_field("email", email)?;
        validate_field("username", username)?;
        validate_password("new_password", new_password)?;

        let user = UserRepository::find_by_email_and_username(&self.pool, email, username)
            .await?
            .ok_or_else(|| ServiceError::not_found(NO_MATCHING_ACCOUNT))?;

        let hashed_password = self.hash_password(new_password).await?;
        self.store_password(&user, &hashed_password).await?;

        info!("Password reset for {}", user.username);
        Ok(Ack::new(PASSWORD_UPDATED))
    }

    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<Ack> {
        validate_field("username", username)?;
        validate_password("current_password", current_password)?;
        validate_password("new_password", new_password)?;

        let user = UserRepository::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))?;

        if !self.verify_password(current_password, &user.hashed_password).await? {
            return Err(ServiceError::IncorrectPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hashed_password = self.hash_password(new_password).await?;
        self.store_password(&user, &hashed_password).await?;

        info!("Password changed for {}", user.username);
        Ok(Ack::new(PASSWORD_CHANGED))
    }

    fn token_bundle(&self, user: &User) -> Result<TokenBundle> {
        let access_token = self.token_issuer.issue(&user.username)?;

        Ok(TokenBundle {
            access_token,
            token_type: "bearer".to_string(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }

    async fn store_password(&self, user: &User, hashed_password: &str) -> Result<()> {
        if !UserRepository::update_password(&self.pool, user.id, hashed_password).await? {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        }
        Ok(())
    }

    /// Argon2 is CPU-bound; keep it off the async workers
    async fn hash_password(&self, password: &str) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        Ok(hashed)
    }

    async fn verify_password(&self, password: &str, hashed_password: &str) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hashed_password = hashed_password.to_string();
        let matches =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed_password)).await??;
        Ok(matches)
    }
}

#[track_caller]
fn invalid_credentials() -> ServiceError {
    ServiceError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
