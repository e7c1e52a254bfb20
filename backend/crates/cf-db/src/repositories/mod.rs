pub mod history_repository;
pub mod user_repository;
