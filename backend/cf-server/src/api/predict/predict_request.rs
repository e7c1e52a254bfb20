use cf_core::FeatureRecord;

use serde::Deserialize;

/// Feature fields plus the optional username to record the result under
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub features: FeatureRecord,

    /// Username (not a numeric id) of the account to record history for
    #[serde(default)]
    pub user_id: Option<String>,
}
