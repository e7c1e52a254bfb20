use crate::{AuthError, Claims, Result as AuthErrorResult};

use cf_core::ErrorLocation;

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs HS256 access tokens carrying the username as subject
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    expiry: Duration,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], expiry_minutes: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            expiry: Duration::minutes(i64::from(expiry_minutes)),
        }
    }

    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
