use std::sync::Arc;

use pathfinder_core::model::{SessionId, SessionSummary, TrackId, TrackRoadmap, Week};
use pathfinder_core::roadmap::TaskToggle;
use storage::repository::SessionStore;

use crate::api::PathfinderApi;
use crate::error::ServiceError;

/// Roadmap retrieval and task completion updates.
#[derive(Clone)]
pub struct RoadmapService {
    api: Arc<dyn PathfinderApi>,
    store: Arc<dyn SessionStore>,
}

impl RoadmapService {
    #[must_use]
    pub fn new(api: Arc<dyn PathfinderApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Fetch (or have the backend generate) the roadmap for `track_id`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn load(&self, track_id: &TrackId) -> Result<TrackRoadmap, ServiceError> {
        let roadmap = self.api.roadmap(track_id).await.map_err(|err| {
            tracing::warn!(%track_id, error = %err, "loading roadmap failed");
            err
        })?;
        Ok(roadmap)
    }

    /// Summary of the stored session, for the tracker page.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn tracker_summary(&self) -> Result<SessionSummary, ServiceError> {
        let session_id = self.session_id().await?;
        let summary = self.api.session_summary(&session_id).await.map_err(|err| {
            tracing::warn!(%session_id, error = %err, "loading tracker failed");
            err
        })?;
        Ok(summary)
    }

    /// Weeks of the roadmap the stored session is following.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn tracker_weeks(&self) -> Result<Vec<Week>, ServiceError> {
        let session_id = self.session_id().await?;
        Ok(self.api.tracker(&session_id).await?)
    }

    /// Send the new status of a toggled task and return the week as the
    /// backend now has it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the update is rejected.
    pub async fn update_task(
        &self,
        session_id: &SessionId,
        toggle: &TaskToggle,
    ) -> Result<Week, ServiceError> {
        let week = self
            .api
            .update_task(session_id, &toggle.update())
            .await
            .map_err(|err| {
                tracing::warn!(
                    %session_id,
                    week = toggle.week_number,
                    task = %toggle.task,
                    error = %err,
                    "task update failed"
                );
                err
            })?;
        tracing::debug!(%session_id, week = week.week, "task update confirmed");
        Ok(week)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    pub async fn session_id(&self) -> Result<SessionId, ServiceError> {
        self.store
            .load_session_id()
            .await?
            .ok_or(ServiceError::MissingSession)
    }
}
