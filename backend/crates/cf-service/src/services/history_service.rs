use crate::services::auth_service::USER_NOT_FOUND;
use crate::{Ack, HISTORY_CLEARED, Result, ServiceError};

use cf_core::{HistoryEntry, NewHistoryEntry};
use cf_db::{HistoryRepository, UserRepository};

use log::{debug, info};
use sqlx::SqlitePool;

pub struct HistoryService {
    pool: SqlitePool,
}

impl HistoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Newest first. An unknown username has an empty history.
    pub async fn list(&self, username: &str) -> Result<Vec<HistoryEntry>> {
        let Some(user) = UserRepository::find_by_username(&self.pool, username).await? else {
            debug!("History requested for unknown user {}", username);
            return Ok(Vec::new());
        };

        let entries = HistoryRepository::new(self.pool.clone())
            .find_by_user(user.id)
            .await?;

        Ok(entries)
    }

    pub async fn clear(&self, username: &str) -> Result<Ack> {
        let user = UserRepository::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))?;

        let removed = HistoryRepository::new(self.pool.clone())
            .delete_by_user(user.id)
            .await?;

        info!("Cleared {} history entries for {}", removed, username);
        Ok(Ack::new(HISTORY_CLEARED))
    }

    /// Persist one prediction. `None` when the username does not resolve.
    pub async fn record(
        &self,
        username: &str,
        carbon_value: f64,
        details: String,
    ) -> Result<Option<HistoryEntry>> {
        let Some(user) = UserRepository::find_by_username(&self.pool, username).await? else {
            return Ok(None);
        };

        let entry = HistoryRepository::new(self.pool.clone())
            .create(&NewHistoryEntry::new(user.id, carbon_value, details))
            .await?;

        Ok(Some(entry))
    }
}
