use async_trait::async_trait;
use pathfinder_core::model::SessionId;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the current session identifier is persisted.
pub const SESSION_ID_KEY: &str = "careerPathfinderSessionId";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable holder of the current session identifier.
///
/// There is no validation and no expiry: whatever was saved last is returned
/// until it is cleared.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn load_session_id(&self) -> Result<Option<SessionId>, StorageError>;

    /// Persist `id`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn save_session_id(&self, id: &SessionId) -> Result<(), StorageError>;

    /// Remove the stored identifier. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be removed.
    async fn clear_session_id(&self) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    session_id: Arc<Mutex<Option<SessionId>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `id` already stored.
    #[must_use]
    pub fn with_session_id(id: SessionId) -> Self {
        Self {
            session_id: Arc::new(Mutex::new(Some(id))),
        }
    }
}

#[async_trait]
impl SessionStore for InMemoryRepository {
    async fn load_session_id(&self) -> Result<Option<SessionId>, StorageError> {
        let guard = self
            .session_id
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_session_id(&self, id: &SessionId) -> Result<(), StorageError> {
        let mut guard = self
            .session_id
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(id.clone());
        Ok(())
    }

    async fn clear_session_id(&self) -> Result<(), StorageError> {
        let mut guard = self
            .session_id
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Client-side state behind trait objects so the backend can be swapped.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemoryRepository::new());
        Self { sessions }
    }
}
