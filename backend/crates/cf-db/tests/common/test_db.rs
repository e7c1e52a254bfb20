use cf_core::User;
use cf_db::{UserRepository, create_in_memory_pool};

use sqlx::SqlitePool;

/// In-memory pool with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    create_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    UserRepository::create(pool, &super::new_user(username))
        .await
        .expect("Failed to create test user")
}
