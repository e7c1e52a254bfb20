#![allow(dead_code)]

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn encoder_json() -> Value {
    json!({
        "encoder": {
            "type": "one_hot",
            "categories": [
                ["omnivore", "vegan", "vegetarian"],
                ["electric", "missing", "petrol"]
            ],
            "handle_unknown": "ignore"
        },
        "categorical_cols": ["Diet", "Vehicle Type"],
        "numerical_cols": ["Monthly Grocery Bill", "Waste Bag Weekly Count"]
    })
}

pub fn linear_model_json() -> Value {
    json!({
        "type": "linear",
        "coefficients": [10.0, 0.0, -5.0, 0.0, 1.0, 20.0, 0.5, 2.0],
        "intercept": 100.0
    })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Temp dir holding `carbon_model.json` and `encoder.json`
pub fn write_artifacts(model: &Value, encoder: &Value) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let model_path = write_json(dir.path(), "carbon_model.json", model);
    let encoder_path = write_json(dir.path(), "encoder.json", encoder);
    (dir, model_path, encoder_path)
}

pub fn record_json() -> Value {
    json!({
        "Body_Type": "obese",
        "Sex": "male",
        "Diet": "omnivore",
        "How_Often_Shower": "twice a day",
        "Heating_Energy_Source": "coal",
        "Transport": "private",
        "Vehicle_Type": "petrol",
        "Social_Activity": "never",
        "Monthly_Grocery_Bill": 300.0,
        "Frequency_of_Traveling_by_Air": "frequently",
        "Vehicle_Monthly_Distance_Km": 1500.0,
        "Waste_Bag_Size": "large",
        "Waste_Bag_Weekly_Count": 6,
        "How_Long_TV_PC_Daily_Hour": 10.0,
        "How_Many_New_Clothes_Monthly": 30,
        "How_Long_Internet_Daily_Hour": 8.0,
        "Energy_efficiency": "No",
        "Recycle_Plastic": 0,
        "Recycle_Glass": 0,
        "Recycle_Paper": 0,
        "Recycle_Metal": 0,
        "Cook_Oven": 1,
        "Cook_Airfryer": 1,
        "Cook_Grill": 1,
        "Cook_Microwave": 1,
        "Cook_Stove": 1
    })
}
