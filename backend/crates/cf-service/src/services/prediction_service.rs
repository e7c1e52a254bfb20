use crate::{HistoryService, Result, ServiceError};

use cf_core::{ErrorLocation, FeatureRecord};
use cf_model::PredictionPipeline;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, warn};

pub struct PredictionService {
    pipeline: Option<Arc<PredictionPipeline>>,
    history: HistoryService,
}

impl PredictionService {
    pub fn new(pipeline: Option<Arc<PredictionPipeline>>, history: HistoryService) -> Self {
        Self { pipeline, history }
    }

    /// Estimate the footprint, then record it for `username` if one is given.
    /// The history write never affects the returned value.
    pub async fn predict(&self, record: &FeatureRecord, username: Option<&str>) -> Result<f64> {
        let pipeline = self.pipeline.as_ref().ok_or_else(|| ServiceError::ModelUnavailable {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let value = pipeline.predict(record).map_err(|e| {
            if e.is_input_error() {
                ServiceError::BadRequest {
                    message: "Input contains a value the model cannot encode".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                ServiceError::from(e)
            }
        })?;

        if let Some(username) = username.filter(|name| !name.is_empty()) {
            self.record_history(username, value, record).await;
        }

        Ok(value)
    }

    async fn record_history(&self, username: &str, value: f64, record: &FeatureRecord) {
        let details = match record.to_details_json() {
            Ok(details) => details,
            Err(e) => {
                warn!("Skipping history for {}: {}", username, e);
                return;
            }
        };

        match self.history.record(username, value, details).await {
            Ok(Some(entry)) => debug!("Recorded history {} for {}", entry.id, username),
            Ok(None) => debug!("No user {}; prediction not recorded", username),
            Err(e) => warn!("Failed to record history for {}: {}", username, e),
        }
    }
}
