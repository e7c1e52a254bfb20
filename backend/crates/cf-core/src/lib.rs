pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::feature_record::{
    FEATURE_COUNT, FEATURE_SCHEMA, FeatureKind, FeatureRecord, FeatureSpec, FeatureValue,
    MISSING_CATEGORY,
};
pub use models::history_entry::{HistoryEntry, NewHistoryEntry};
pub use models::user::{NewUser, User};
