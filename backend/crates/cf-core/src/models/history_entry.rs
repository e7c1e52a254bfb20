//! One recorded prediction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub carbon_value: f64,
    /// JSON snapshot of the submitted feature fields
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user_id: i64,
    pub carbon_value: f64,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl NewHistoryEntry {
    /// Entry stamped with the current server time
    pub fn new(user_id: i64, carbon_value: f64, details: String) -> Self {
        Self {
            user_id,
            carbon_value,
            details,
            timestamp: Utc::now(),
        }
    }
}
