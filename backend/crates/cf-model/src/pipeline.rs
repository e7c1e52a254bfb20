use crate::{EncoderBundle, ModelError, Regressor, Result};

use cf_core::{ErrorLocation, FeatureKind, FeatureRecord, FeatureSpec, MISSING_CATEGORY};

use log::info;
use std::panic::Location;
use std::path::Path;

/// Encoder and regressor checked against each other and against the feature
/// schema. Immutable once built.
#[derive(Debug)]
pub struct PredictionPipeline {
    bundle: EncoderBundle,
    regressor: Regressor,
    /// `FEATURE_SCHEMA` index of each bundle column, in bundle order
    categorical_indices: Vec<usize>,
    numeric_indices: Vec<usize>,
}

impl PredictionPipeline {
    /// Read both artifacts from disk and validate them
    pub fn load(model_path: &Path, encoder_path: &Path) -> Result<Self> {
        let regressor = Regressor::load(model_path)?;
        let bundle = EncoderBundle::load(encoder_path)?;
        let pipeline = Self::from_parts(bundle, regressor)?;

        info!(
            "Loaded {} model ({} inputs) from {}",
            pipeline.model_kind(),
            pipeline.input_width(),
            model_path.display()
        );

        Ok(pipeline)
    }

    pub fn from_parts(bundle: EncoderBundle, regressor: Regressor) -> Result<Self> {
        bundle.encoder.validate()?;
        regressor.validate()?;

        let categorical_indices =
            resolve_columns(&bundle.categorical_cols, FeatureKind::Categorical)?;
        let numeric_indices = resolve_columns(&bundle.numerical_cols, FeatureKind::Numeric)?;

        if categorical_indices.len() != bundle.encoder.column_count() {
            return Err(ModelError::invalid(format!(
                "bundle lists {} categorical columns but the encoder was fitted on {}",
                categorical_indices.len(),
                bundle.encoder.column_count()
            )));
        }

        if bundle.row_width() != regressor.input_width() {
            return Err(ModelError::invalid(format!(
                "encoded row has {} values but the model expects {}",
                bundle.row_width(),
                regressor.input_width()
            )));
        }

        Ok(Self {
            bundle,
            regressor,
            categorical_indices,
            numeric_indices,
        })
    }

    pub fn input_width(&self) -> usize {
        self.regressor.input_width()
    }

    pub fn model_kind(&self) -> &'static str {
        match self.regressor {
            Regressor::Linear { .. } => "linear",
            Regressor::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    /// Encode one record into a feature row
    pub fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        let values = record.values();

        let categories: Vec<&str> = self
            .categorical_indices
            .iter()
            .map(|&index| values[index].category_or_missing().unwrap_or(MISSING_CATEGORY))
            .collect();

        let mut row = Vec::with_capacity(self.input_width());
        self.bundle
            .encoder
            .encode_into(&categories, &self.bundle.categorical_cols, &mut row)?;
        row.extend(
            self.numeric_indices
                .iter()
                .map(|&index| values[index].as_number().unwrap_or_default()),
        );

        Ok(row)
    }

    /// Estimated footprint for one record
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64> {
        let row = self.encode(record)?;
        let prediction = self.regressor.predict(&row);

        if !prediction.is_finite() {
            return Err(ModelError::NonFinite {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(prediction)
    }
}

/// Map artifact labels onto schema positions, checking each column's kind
fn resolve_columns(labels: &[String], expected: FeatureKind) -> Result<Vec<usize>> {
    labels
        .iter()
        .map(|label| match FeatureSpec::by_label(label) {
            Some((index, spec)) if spec.kind == expected => Ok(index),
            Some(_) => Err(ModelError::invalid(format!(
                "column '{}' is not {:?}",
                label, expected
            ))),
            None => Err(ModelError::invalid(format!("unknown feature column '{}'", label))),
        })
        .collect()
}
