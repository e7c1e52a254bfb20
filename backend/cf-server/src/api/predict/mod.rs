#[allow(clippy::module_inception)]
pub mod predict;
pub mod predict_request;
pub mod predict_response;
