use crate::{FEATURE_SCHEMA, FeatureKind, FeatureRecord, FeatureSpec, FeatureValue};

use serde_json::json;

fn sample_json() -> serde_json::Value {
    json!({
        "Body_Type": "overweight",
        "Sex": "female",
        "Diet": "vegetarian",
        "How_Often_Shower": "daily",
        "Heating_Energy_Source": "electricity",
        "Transport": "private",
        "Vehicle_Type": "petrol",
        "Social_Activity": "often",
        "Monthly_Grocery_Bill": 230.0,
        "Frequency_of_Traveling_by_Air": "rarely",
        "Vehicle_Monthly_Distance_Km": 210,
        "Waste_Bag_Size": "large",
        "Waste_Bag_Weekly_Count": 4,
        "How_Long_TV_PC_Daily_Hour": 7.5,
        "How_Many_New_Clothes_Monthly": 26,
        "How_Long_Internet_Daily_Hour": 1,
        "Energy_efficiency": "No",
        "Recycle_Plastic": 1,
        "Recycle_Glass": 0,
        "Recycle_Paper": 1,
        "Recycle_Metal": 0,
        "Cook_Oven": 1,
        "Cook_Airfryer": 0,
        "Cook_Grill": 0,
        "Cook_Microwave": 1,
        "Cook_Stove": 1
    })
}

#[test]
fn test_schema_wire_names_match_serialized_keys() {
    let record: FeatureRecord = serde_json::from_value(sample_json()).unwrap();
    let serialized = serde_json::to_value(&record).unwrap();
    assert_eq!(serialized.as_object().unwrap().len(), FEATURE_SCHEMA.len());
    for spec in FEATURE_SCHEMA.iter() {
        assert!(
            serialized.get(spec.wire_name).is_some(),
            "missing key {}",
            spec.wire_name
        );
    }
}

#[test]
fn test_schema_kinds_match_record_values() {
    let record: FeatureRecord = serde_json::from_value(sample_json()).unwrap();

    for (spec, value) in FEATURE_SCHEMA.iter().zip(record.values()) {
        match (spec.kind, value) {
            (FeatureKind::Categorical, FeatureValue::Category(_)) => {}
            (FeatureKind::Numeric, FeatureValue::Number(_)) => {}
            _ => panic!("kind mismatch for {}", spec.label),
        }
    }
}

#[test]
fn test_vehicle_type_may_be_absent_or_null() {
    let mut absent = sample_json();
    absent.as_object_mut().unwrap().remove("Vehicle_Type");
    let record: FeatureRecord = serde_json::from_value(absent).unwrap();
    assert_eq!(record.vehicle_type, None);

    let mut null = sample_json();
    null["Vehicle_Type"] = serde_json::Value::Null;
    let record: FeatureRecord = serde_json::from_value(null).unwrap();
    let (index, _) = FeatureSpec::by_label("Vehicle Type").unwrap();
    assert_eq!(record.values()[index].category_or_missing(), Some("missing"));
}

#[test]
fn test_required_field_missing_fails_to_deserialize() {
    let mut body = sample_json();
    body.as_object_mut().unwrap().remove("Diet");

    assert!(serde_json::from_value::<FeatureRecord>(body).is_err());
}

#[test]
fn test_integer_field_rejects_string() {
    let mut body = sample_json();
    body["Cook_Oven"] = json!("yes");

    assert!(serde_json::from_value::<FeatureRecord>(body).is_err());
}

#[test]
fn test_values_follow_renaming_table() {
    let record: FeatureRecord = serde_json::from_value(sample_json()).unwrap();
    let values = record.values();

    let (body_type, _) = FeatureSpec::by_label("Body Type").unwrap();
    assert_eq!(values[body_type], FeatureValue::Category(Some("overweight")));

    let (distance, _) = FeatureSpec::by_label("Vehicle Monthly Distance Km").unwrap();
    assert_eq!(values[distance].as_number(), Some(210.0));

    assert!(FeatureSpec::by_label("Body_Type").is_none());
}

#[test]
fn test_by_label_returns_schema_index() {
    let (index, spec) = FeatureSpec::by_label("Energy efficiency").unwrap();

    assert_eq!(FEATURE_SCHEMA[index].wire_name, "Energy_efficiency");
    assert_eq!(spec.kind, FeatureKind::Categorical);
    assert!(FeatureSpec::by_label("Shoe Size").is_none());
}

#[test]
fn test_details_json_keeps_wire_names_and_null_vehicle() {
    let mut body = sample_json();
    body["Vehicle_Type"] = serde_json::Value::Null;
    let record: FeatureRecord = serde_json::from_value(body).unwrap();

    let details: serde_json::Value =
        serde_json::from_str(&record.to_details_json().unwrap()).unwrap();

    assert_eq!(details["Body_Type"], "overweight");
    assert!(details["Vehicle_Type"].is_null());
    assert_eq!(details["Waste_Bag_Weekly_Count"], 4);
    assert!(details.get("user_id").is_none());
}
