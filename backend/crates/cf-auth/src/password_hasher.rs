//! Salted one-way password hashing (Argon2id, PHC string output).

use crate::{AuthError, Result as AuthErrorResult};

use cf_core::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

const SALT_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Argon2id with the crate's recommended default cost
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Custom cost parameters (memory in KiB, iterations, lanes)
    #[track_caller]
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> AuthErrorResult<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None).map_err(|e| {
            AuthError::PasswordHash {
                message: format!("invalid Argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
    /// Cost parameters are taken from the stored hash.
    #[track_caller]
    pub fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
            message: format!("stored hash is malformed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
