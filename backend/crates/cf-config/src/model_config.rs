use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENCODER_FILENAME, DEFAULT_MODEL_FILENAME};

use serde::Deserialize;

/// Locations of the offline-trained prediction artifacts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Regressor JSON; relative paths resolve against the config directory
    pub model_path: String,
    /// Encoder bundle JSON; relative paths resolve against the config directory
    pub encoder_path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: String::from(DEFAULT_MODEL_FILENAME),
            encoder_path: String::from(DEFAULT_ENCODER_FILENAME),
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.model_path.trim().is_empty() {
            return Err(ConfigError::model("model.model_path cannot be empty"));
        }
        if self.encoder_path.trim().is_empty() {
            return Err(ConfigError::model("model.encoder_path cannot be empty"));
        }
        Ok(())
    }
}
