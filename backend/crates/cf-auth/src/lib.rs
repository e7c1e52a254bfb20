pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password_hasher;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password_hasher::PasswordHasher;
pub use token_issuer::TokenIssuer;
