#![allow(dead_code)]

//! Test infrastructure for cf-server API tests

use cf_auth::PasswordHasher;
use cf_db::create_in_memory_pool;
use cf_model::{Encoder, EncoderBundle, HandleUnknown, PredictionPipeline, Regressor};
use cf_server::build_router;
use cf_service::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-server-tests-0123456789";

/// AppState over an in-memory database, without a model
pub async fn create_test_app_state() -> AppState {
    let pool = create_in_memory_pool()
        .await
        .expect("Failed to create test database");
    let hasher = PasswordHasher::with_params(1024, 1, 1).expect("valid Argon2 params");

    AppState::new(pool, TEST_SECRET, 30, hasher)
}

pub async fn create_test_app_state_with_model() -> AppState {
    create_test_app_state()
        .await
        .with_pipeline(Some(fixture_pipeline()))
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

/// Omnivore with a petrol car, grocery 300, 6 bags. The fixture model scores it 292.
pub fn predict_body() -> Value {
    json!({
        "Body_Type": "overweight",
        "Sex": "female",
        "Diet": "omnivore",
        "How_Often_Shower": "more frequently",
        "Heating_Energy_Source": "wood",
        "Transport": "private",
        "Vehicle_Type": "petrol",
        "Social_Activity": "often",
        "Monthly_Grocery_Bill": 300,
        "Frequency_of_Traveling_by_Air": "very frequently",
        "Vehicle_Monthly_Distance_Km": 2500,
        "Waste_Bag_Size": "extra large",
        "Waste_Bag_Weekly_Count": 6,
        "How_Long_TV_PC_Daily_Hour": 9,
        "How_Many_New_Clothes_Monthly": 20,
        "How_Long_Internet_Daily_Hour": 12,
        "Energy_efficiency": "No",
        "Recycle_Plastic": 0,
        "Recycle_Glass": 1,
        "Recycle_Paper": 0,
        "Recycle_Metal": 0,
        "Cook_Oven": 1,
        "Cook_Airfryer": 0,
        "Cook_Grill": 1,
        "Cook_Microwave": 0,
        "Cook_Stove": 1
    })
}

/// Send a request through the router and decode the JSON body (Null when empty)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get(state: &AppState, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
    send(build_router(state.clone()), "GET", uri, None, bearer).await
}

pub async fn post(
    state: &AppState,
    uri: &str,
    body: Value,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    send(build_router(state.clone()), "POST", uri, Some(body), bearer).await
}

pub async fn signup(state: &AppState, username: &str, password: &str) -> Value {
    let (status, json) = send(
        build_router(state.clone()),
        "POST",
        "/signup",
        Some(json!({
            "name": format!("User {}", username),
            "username": username,
            "email": format!("{}@example.com", username),
            "password": password,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {}", json);
    json
}
