pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        auth::{change_password, forgot_password, login, signup},
        change_password_request::ChangePasswordRequest,
        forgot_password_request::ForgotPasswordRequest,
        login_request::LoginRequest,
        signup_request::SignupRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{bearer::OptionalBearer, validated_json::ValidatedJson},
    history::{
        history::{clear_history, get_history},
        history_record::HistoryRecord,
    },
    predict::{
        predict::predict,
        predict_request::PredictRequest,
        predict_response::PredictResponse,
    },
};

pub use crate::routes::build_router;
