use std::sync::Arc;

use pathfinder_core::model::CareerTrack;
use storage::repository::SessionStore;

use crate::api::PathfinderApi;
use crate::error::ServiceError;

/// Career track recommendations and enrollment.
#[derive(Clone)]
pub struct TrackService {
    api: Arc<dyn PathfinderApi>,
    store: Arc<dyn SessionStore>,
}

impl TrackService {
    #[must_use]
    pub fn new(api: Arc<dyn PathfinderApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Tracks recommended for the stored session.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn list_for_current_session(&self) -> Result<Vec<CareerTrack>, ServiceError> {
        let session_id = self
            .store
            .load_session_id()
            .await?
            .ok_or(ServiceError::MissingSession)?;
        let tracks = self.api.career_tracks(&session_id).await.map_err(|err| {
            tracing::warn!(%session_id, error = %err, "loading career tracks failed");
            err
        })?;
        Ok(tracks)
    }

    /// Flip the enrollment of `track` and return it with the confirmed flag.
    ///
    /// Nothing but `is_enrolled` is taken from the reply.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingTrackId` if `track` has no identifier.
    /// Returns `ServiceError::Api` if the request fails.
    pub async fn toggle_enrollment(&self, track: &CareerTrack) -> Result<CareerTrack, ServiceError> {
        let track_id = track.id.as_ref().ok_or(ServiceError::MissingTrackId)?;
        let confirmed = self
            .api
            .set_enrollment(track_id, !track.is_enrolled)
            .await
            .map_err(|err| {
                tracing::warn!(%track_id, error = %err, "enrollment update failed");
                err
            })?;
        tracing::info!(%track_id, enrolled = confirmed.is_enrolled, "enrollment updated");
        Ok(track.with_enrollment_from(&confirmed))
    }
}
