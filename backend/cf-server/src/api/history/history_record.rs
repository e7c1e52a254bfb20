use cf_core::HistoryEntry;

use chrono::SecondsFormat;
use serde::Serialize;

/// One past prediction as returned to clients
#[derive(Debug, Serialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub carbon_value: f64,
    /// JSON string of the submitted feature fields
    pub details: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub user_id: i64,
}

impl From<HistoryEntry> for HistoryRecord {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            carbon_value: entry.carbon_value,
            details: entry.details,
            timestamp: entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            user_id: entry.user_id,
        }
    }
}
