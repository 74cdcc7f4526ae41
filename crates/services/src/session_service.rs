use std::sync::Arc;

use pathfinder_core::model::{
    Domain, QuizStart, SessionDetails, SessionId, SessionSummary, sort_newest_first,
};
use storage::repository::SessionStore;

use crate::api::PathfinderApi;
use crate::error::ServiceError;

/// Owns the current-session identifier and the session-level queries.
#[derive(Clone)]
pub struct SessionService {
    api: Arc<dyn PathfinderApi>,
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    #[must_use]
    pub fn new(api: Arc<dyn PathfinderApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Start a new session for `domain`.
    ///
    /// The stored identifier is cleared before the request goes out and only
    /// replaced once the backend has answered, so a failed start leaves no
    /// session behind.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Domain` for a blank domain (nothing is cleared).
    /// Returns `ServiceError::Api` if the backend rejects the request.
    /// Returns `ServiceError::Storage` if the identifier cannot be persisted.
    pub async fn start(&self, domain: &str) -> Result<QuizStart, ServiceError> {
        let domain = Domain::new(domain)?;
        self.store.clear_session_id().await?;

        let start = self.api.init_domain(&domain).await.map_err(|err| {
            tracing::warn!(%domain, error = %err, "session start failed");
            err
        })?;
        self.store.save_session_id(&start.session_id).await?;
        tracing::info!(session_id = %start.session_id, %domain, "session started");
        Ok(start)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the store cannot be read.
    pub async fn current_session_id(&self) -> Result<Option<SessionId>, ServiceError> {
        Ok(self.store.load_session_id().await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    pub async fn require_session_id(&self) -> Result<SessionId, ServiceError> {
        self.current_session_id()
            .await?
            .ok_or(ServiceError::MissingSession)
    }

    /// Full summary for `explicit`, or for the stored session when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when neither is available.
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn summary(
        &self,
        explicit: Option<SessionId>,
    ) -> Result<SessionSummary, ServiceError> {
        let session_id = match explicit {
            Some(id) => id,
            None => self.require_session_id().await?,
        };
        let summary = self.api.session_summary(&session_id).await.map_err(|err| {
            tracing::warn!(%session_id, error = %err, "session summary failed");
            err
        })?;
        Ok(summary)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn details(&self, session_id: &SessionId) -> Result<SessionDetails, ServiceError> {
        let details = self.api.session_details(session_id).await.map_err(|err| {
            tracing::warn!(%session_id, error = %err, "session details failed");
            err
        })?;
        Ok(details)
    }

    /// Every session the backend knows, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn list_sessions(&self) -> Result<Vec<SessionDetails>, ServiceError> {
        let mut sessions = self.api.sessions().await.map_err(|err| {
            tracing::warn!(error = %err, "listing sessions failed");
            err
        })?;
        sort_newest_first(&mut sessions);
        Ok(sessions)
    }
}
