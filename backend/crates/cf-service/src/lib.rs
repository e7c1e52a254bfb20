pub mod app_state;
pub mod error;
pub mod services;
pub mod validation;

pub use app_state::AppState;
pub use error::{Result, ServiceError};
pub use services::auth_service::{AuthService, TokenBundle};
pub use services::history_service::HistoryService;
pub use services::prediction_service::PredictionService;
pub use services::{Ack, HISTORY_CLEARED, PASSWORD_CHANGED, PASSWORD_UPDATED};
pub use validation::{MAX_FIELD_LENGTH, MAX_PASSWORD_LENGTH, validate_field, validate_password};
