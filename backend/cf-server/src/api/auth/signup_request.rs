use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}
