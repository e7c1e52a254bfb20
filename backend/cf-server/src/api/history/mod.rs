#[allow(clippy::module_inception)]
pub mod history;
pub mod history_record;
