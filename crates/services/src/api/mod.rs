//! Request wrappers for the Pathfinder backend.
//!
//! Every call is a single request: no retry, no caching. Server errors are
//! handed back as [`ApiError`] untouched.

use async_trait::async_trait;

use pathfinder_core::model::{
    CareerTrack, Domain, LevelPrediction, QuizAnswer, QuizId, QuizStart, SessionDetails,
    SessionId, SessionSummary, TrackId, TrackRoadmap, Week,
};
use pathfinder_core::roadmap::TaskUpdate;

use crate::error::ApiError;

mod http;
#[cfg(any(test, feature = "test-support"))]
mod in_memory;

pub use http::{ApiConfig, DEFAULT_API_URL, HttpPathfinderApi};
#[cfg(any(test, feature = "test-support"))]
pub use in_memory::{Endpoint, InMemoryPathfinderApi};

#[async_trait]
pub trait PathfinderApi: Send + Sync {
    /// `POST /init-domain`
    async fn init_domain(&self, domain: &Domain) -> Result<QuizStart, ApiError>;

    /// `POST /submit-answers`
    async fn submit_answers(
        &self,
        session_id: &SessionId,
        quiz_id: &QuizId,
        answers: &[QuizAnswer],
    ) -> Result<LevelPrediction, ApiError>;

    /// `GET /career-tracks/{sessionId}`
    async fn career_tracks(&self, session_id: &SessionId) -> Result<Vec<CareerTrack>, ApiError>;

    /// `GET /roadmap/{trackId}`
    async fn roadmap(&self, track_id: &TrackId) -> Result<TrackRoadmap, ApiError>;

    /// `GET /tracker/{sessionId}`
    async fn tracker(&self, session_id: &SessionId) -> Result<Vec<Week>, ApiError>;

    /// `PATCH /tracker/{sessionId}`
    async fn update_task(
        &self,
        session_id: &SessionId,
        update: &TaskUpdate,
    ) -> Result<Week, ApiError>;

    /// `GET /session-summary/{sessionId}`
    async fn session_summary(&self, session_id: &SessionId) -> Result<SessionSummary, ApiError>;

    /// `GET /session/{sessionId}`
    async fn session_details(&self, session_id: &SessionId) -> Result<SessionDetails, ApiError>;

    /// `GET /sessions`
    async fn sessions(&self) -> Result<Vec<SessionDetails>, ApiError>;

    /// `PATCH /career-tracks/{trackId}/enroll`
    async fn set_enrollment(
        &self,
        track_id: &TrackId,
        is_enrolled: bool,
    ) -> Result<CareerTrack, ApiError>;
}
