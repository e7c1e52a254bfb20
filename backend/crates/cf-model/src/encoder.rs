use crate::{ModelError, Result};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use std::panic::Location;

/// What a one-hot encoder does with a category it was not fitted on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Emit an all-zero block
    #[default]
    Ignore,
    Error,
}

/// Fitted categorical encoder. `categories[i]` lists the known values of the
/// i-th encoded column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Encoder {
    OneHot {
        categories: Vec<Vec<String>>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
    Ordinal {
        categories: Vec<Vec<String>>,
        #[serde(default)]
        unknown_value: Option<f64>,
    },
}

impl Encoder {
    fn categories(&self) -> &[Vec<String>] {
        match self {
            Self::OneHot { categories, .. } | Self::Ordinal { categories, .. } => categories,
        }
    }

    /// Number of input columns
    pub fn column_count(&self) -> usize {
        self.categories().len()
    }

    /// Number of output values produced for one row
    pub fn output_width(&self) -> usize {
        match self {
            Self::OneHot { categories, .. } => categories.iter().map(Vec::len).sum(),
            Self::Ordinal { categories, .. } => categories.len(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (index, column) in self.categories().iter().enumerate() {
            if column.is_empty() {
                return Err(ModelError::invalid(format!(
                    "encoder column {} has no categories",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Append the encoding of `values` (one per column, in fitted order) to `out`.
    /// `names` labels the columns in error messages.
    pub fn encode_into(&self, values: &[&str], names: &[String], out: &mut Vec<f64>) -> Result<()> {
        if values.len() != self.column_count() {
            return Err(ModelError::invalid(format!(
                "encoder expects {} columns, got {}",
                self.column_count(),
                values.len()
            )));
        }

        for (index, (value, known)) in values.iter().zip(self.categories()).enumerate() {
            let position = known.iter().position(|category| category == value);
            let column = || names.get(index).cloned().unwrap_or_else(|| index.to_string());

            match self {
                Self::OneHot { handle_unknown, .. } => {
                    if position.is_none() && *handle_unknown == HandleUnknown::Error {
                        return Err(unknown_category(column(), value));
                    }
                    out.extend(
                        (0..known.len()).map(|i| if Some(i) == position { 1.0 } else { 0.0 }),
                    );
                }
                Self::Ordinal { unknown_value, .. } => {
                    let encoded = match (position, unknown_value) {
                        (Some(i), _) => i as f64,
                        (None, Some(fallback)) => *fallback,
                        (None, None) => return Err(unknown_category(column(), value)),
                    };
                    out.push(encoded);
                }
            }
        }

        Ok(())
    }
}

#[track_caller]
fn unknown_category(column: String, value: &str) -> ModelError {
    ModelError::Encoding {
        column,
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
