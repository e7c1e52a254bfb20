#![allow(dead_code)]

use cf_auth::PasswordHasher;
use cf_core::FeatureRecord;
use cf_db::{create_in_memory_pool, create_pool};
use cf_model::{Encoder, EncoderBundle, HandleUnknown, PredictionPipeline, Regressor};
use cf_service::AppState;

use serde_json::json;
use tempfile::TempDir;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-service-tests-0123456789";

/// Cheap Argon2 parameters so tests stay fast
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_params(1024, 1, 1).expect("valid Argon2 params")
}

/// State over a fresh in-memory database, without a model
pub async fn create_test_state() -> AppState {
    let pool = create_in_memory_pool().await.expect("Failed to create test pool");
    AppState::new(pool, TEST_SECRET, 30, fast_hasher())
}

/// State over an on-disk WAL database with a multi-connection pool. Keep the
/// TempDir alive for the duration of the test.
pub async fn create_file_backed_state() -> (TempDir, AppState) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = create_pool(&dir.path().join("carbon.db"))
        .await
        .expect("Failed to create file pool");
    (dir, AppState::new(pool, TEST_SECRET, 30, fast_hasher()))
}

pub async fn create_test_state_with_model() -> AppState {
    create_test_state().await.with_pipeline(Some(fixture_pipeline()))
}

/// Linear model over Diet, Vehicle Type, grocery bill and weekly waste bags
pub fn fixture_pipeline() -> PredictionPipeline {
    let bundle = EncoderBundle {
        encoder: Encoder::OneHot {
            categories: vec![
                vec!["omnivore".into(), "vegan".into(), "vegetarian".into()],
                vec!["electric".into(), "missing".into(), "petrol".into()],
            ],
            handle_unknown: HandleUnknown::Ignore,
        },
        categorical_cols: vec!["Diet".into(), "Vehicle Type".into()],
        numerical_cols: vec!["Monthly Grocery Bill".into(), "Waste Bag Weekly Count".into()],
    };
    let model = Regressor::Linear {
        coefficients: vec![10.0, 0.0, -5.0, 0.0, 1.0, 20.0, 0.5, 2.0],
        intercept: 100.0,
    };
    PredictionPipeline::from_parts(bundle, model).expect("valid fixture pipeline")
}

/// Vegan, no vehicle, grocery 200, 4 bags. The fixture model scores it 209.
pub fn fixture_record() -> FeatureRecord {
    serde_json::from_value(json!({
        "Body_Type": "normal",
        "Sex": "male",
        "Diet": "vegan",
        "How_Often_Shower": "daily",
        "Heating_Energy_Source": "natural gas",
        "Transport": "walk/bicycle",
        "Social_Activity": "sometimes",
        "Monthly_Grocery_Bill": 200.0,
        "Frequency_of_Traveling_by_Air": "never",
        "Vehicle_Monthly_Distance_Km": 0.0,
        "Waste_Bag_Size": "small",
        "Waste_Bag_Weekly_Count": 4,
        "How_Long_TV_PC_Daily_Hour": 2.0,
        "How_Many_New_Clothes_Monthly": 1,
        "How_Long_Internet_Daily_Hour": 3.0,
        "Energy_efficiency": "Sometimes",
        "Recycle_Plastic": 1,
        "Recycle_Glass": 1,
        "Recycle_Paper": 1,
        "Recycle_Metal": 1,
        "Cook_Oven": 0,
        "Cook_Airfryer": 1,
        "Cook_Grill": 0,
        "Cook_Microwave": 1,
        "Cook_Stove": 1
    }))
    .expect("valid fixture record")
}

pub async fn signup(state: &AppState, username: &str) {
    state
        .auth_service()
        .signup(
            &format!("User {}", username),
            username,
            &format!("{}@example.com", username),
            "correct horse",
        )
        .await
        .expect("signup succeeds");
}
