use cf_core::{NewHistoryEntry, NewUser};

use chrono::{DateTime, Utc};

/// User whose email and name are derived from the username
pub fn new_user(username: &str) -> NewUser {
    NewUser::new(
        format!("Test {}", username),
        username.to_string(),
        format!("{}@example.com", username),
        "$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

pub fn new_history_entry(user_id: i64, carbon_value: f64) -> NewHistoryEntry {
    NewHistoryEntry::new(user_id, carbon_value, r#"{"Diet":"vegan"}"#.to_string())
}

/// Entry with a fixed timestamp, in unix seconds
pub fn new_history_entry_at(user_id: i64, carbon_value: f64, unix_seconds: i64) -> NewHistoryEntry {
    let timestamp: DateTime<Utc> =
        DateTime::from_timestamp(unix_seconds, 0).expect("valid test timestamp");
    NewHistoryEntry {
        user_id,
        carbon_value,
        details: r#"{"Diet":"omnivore"}"#.to_string(),
        timestamp,
    }
}
