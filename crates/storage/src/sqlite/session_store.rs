use async_trait::async_trait;
use chrono::Utc;
use pathfinder_core::model::SessionId;
use sqlx::Row;

use crate::repository::{SESSION_ID_KEY, SessionStore, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SessionStore for SqliteRepository {
    async fn load_session_id(&self) -> Result<Option<SessionId>, StorageError> {
        let row = sqlx::query("SELECT value FROM client_state WHERE key = ?1")
            .bind(SESSION_ID_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(SessionId::new(value)))
    }

    async fn save_session_id(&self, id: &SessionId) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO client_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(SESSION_ID_KEY)
        .bind(id.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn clear_session_id(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM client_state WHERE key = ?1")
            .bind(SESSION_ID_KEY)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
