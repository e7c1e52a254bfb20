pub mod feature_record;
pub mod history_entry;
pub mod user;
