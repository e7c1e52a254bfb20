//! Fitted-artifact inference for carbon footprint estimates.
//!
//! A [`PredictionPipeline`] pairs an [`EncoderBundle`] (categorical encoder
//! plus the column lists it was fitted with) and a [`Regressor`]. Both are
//! JSON documents validated against each other once at load time, after
//! which the pipeline is immutable and safe to share.

pub mod artifacts;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod regressor;

pub use artifacts::EncoderBundle;
pub use encoder::{Encoder, HandleUnknown};
pub use error::{ModelError, Result};
pub use pipeline::PredictionPipeline;
pub use regressor::{Aggregation, Regressor, Tree, TreeEnsemble};
