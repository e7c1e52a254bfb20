pub mod auth_service;
pub mod history_service;
pub mod prediction_service;

use serde::{Deserialize, Serialize};

pub const PASSWORD_UPDATED: &str = "Password updated successfully";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";
pub const HISTORY_CLEARED: &str = "History cleared successfully";

/// Acknowledgement body for operations without a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
