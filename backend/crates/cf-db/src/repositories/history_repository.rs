use crate::{DbError, Result as DbErrorResult};

use cf_core::{ErrorLocation, HistoryEntry, NewHistoryEntry};

use std::panic::Location;

use chrono::DateTime;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    user_id: i64,
    carbon_value: f64,
    details: String,
    timestamp: i64,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let timestamp =
            DateTime::from_timestamp(row.timestamp, 0).ok_or_else(|| DbError::InvalidData {
                message: format!("history {} has out-of-range timestamp {}", row.id, row.timestamp),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            carbon_value: row.carbon_value,
            details: row.details,
            timestamp,
        })
    }
}

pub struct HistoryRepository {
    pool: SqlitePool,
}

impl HistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entry: &NewHistoryEntry) -> DbErrorResult<HistoryEntry> {
        let timestamp = entry.timestamp.timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO history (carbon_value, details, timestamp, user_id)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(entry.carbon_value)
        .bind(&entry.details)
        .bind(timestamp)
        .bind(entry.user_id)
        .execute(&self.pool)
        .await?;

        HistoryEntry::try_from(HistoryRow {
            id: result.last_insert_rowid(),
            user_id: entry.user_id,
            carbon_value: entry.carbon_value,
            details: entry.details.clone(),
            timestamp,
        })
    }

    /// Newest first; entries sharing a second are ordered by insertion, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
              SELECT id, user_id, carbon_value, details, timestamp
              FROM history
              WHERE user_id = ?
              ORDER BY timestamp DESC, id DESC
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HistoryEntry::try_from).collect()
    }

    /// Returns the number of rows removed
    pub async fn delete_by_user(&self, user_id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM history WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_by_user(&self, user_id: i64) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM history WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
