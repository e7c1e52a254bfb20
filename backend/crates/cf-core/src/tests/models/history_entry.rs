use crate::{HistoryEntry, NewHistoryEntry};

use chrono::{TimeZone, Utc};

#[test]
fn test_new_history_entry_is_stamped_now() {
    let before = Utc::now();
    let entry = NewHistoryEntry::new(7, 1234.5, "{}".to_string());
    let after = Utc::now();

    assert_eq!(entry.user_id, 7);
    assert_eq!(entry.carbon_value, 1234.5);
    assert!(entry.timestamp >= before && entry.timestamp <= after);
}

#[test]
fn test_history_entry_serializes_timestamp_as_rfc3339() {
    let entry = HistoryEntry {
        id: 1,
        user_id: 2,
        carbon_value: 99.0,
        details: "{\"Sex\":\"male\"}".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
    };

    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["carbon_value"], 99.0);
    assert_eq!(json["timestamp"], "2026-03-01T12:30:00Z");
    assert_eq!(json["details"], "{\"Sex\":\"male\"}");
}
