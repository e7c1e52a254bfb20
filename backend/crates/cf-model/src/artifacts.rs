use crate::{Encoder, ModelError, Regressor, Result};

use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::panic::Location;
use std::path::Path;

/// Encoder plus the column labels it was fitted with. Categorical columns are
/// encoded in `categorical_cols` order, then `numerical_cols` are appended as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderBundle {
    pub encoder: Encoder,
    pub categorical_cols: Vec<String>,
    pub numerical_cols: Vec<String>,
}

impl EncoderBundle {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Width of the row handed to the regressor
    pub fn row_width(&self) -> usize {
        self.encoder.output_width() + self.numerical_cols.len()
    }
}

impl Regressor {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

#[track_caller]
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })?;

    serde_json::from_str(&contents).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
