use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_carbon_footprint: f64,
}
