use serde::Deserialize;

/// Both `email` and `username` must belong to the same account
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub username: String,
    pub new_password: String,
}
