//! Request field checks shared by the auth operations.

use crate::{Result, ServiceError};

pub const MAX_FIELD_LENGTH: usize = 255;

/// Caps the input handed to the password hasher
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// Non-blank, bounded identity field (name, username, email)
pub fn validate_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(field, format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ServiceError::validation(
            field,
            format!("{} must be at most {} characters", field, MAX_FIELD_LENGTH),
        ));
    }
    Ok(())
}

pub fn validate_password(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(field, format!("{} must not be empty", field)));
    }
    if value.len() > MAX_PASSWORD_LENGTH {
        return Err(ServiceError::validation(
            field,
            format!("{} must be at most {} bytes", field, MAX_PASSWORD_LENGTH),
        ));
    }
    Ok(())
}
