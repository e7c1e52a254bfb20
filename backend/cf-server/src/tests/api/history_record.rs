use crate::HistoryRecord;

use cf_core::HistoryEntry;

use chrono::DateTime;

#[test]
fn test_history_record_serializes_rfc3339_utc_timestamp() {
    let entry = HistoryEntry {
        id: 3,
        user_id: 1,
        carbon_value: 2054.5,
        details: r#"{"Diet":"vegan"}"#.to_string(),
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    };

    let json = serde_json::to_value(HistoryRecord::from(entry)).unwrap();

    assert_eq!(json["id"], 3);
    assert_eq!(json["user_id"], 1);
    assert_eq!(json["carbon_value"], 2054.5);
    assert_eq!(json["details"], r#"{"Diet":"vegan"}"#);
    assert_eq!(json["timestamp"], "2023-11-14T22:13:20Z");
}
