pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, check_health, create_in_memory_pool, create_pool};
pub use error::{DbError, Result};
pub use repositories::history_repository::HistoryRepository;
pub use repositories::user_repository::UserRepository;
