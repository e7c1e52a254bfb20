#[allow(clippy::module_inception)]
pub mod auth;
pub mod change_password_request;
pub mod forgot_password_request;
pub mod login_request;
pub mod signup_request;
