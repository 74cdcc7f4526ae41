use pathfinder_core::model::{CareerTrack, QuizStart, SessionId, Week};
use pathfinder_core::roadmap::TaskToggle;
use services::{QuizService, RoadmapService, SessionService, TrackService};

use crate::views::{Action, ViewError};

/// Start a new session for the typed domain.
///
/// # Errors
///
/// Returns `ViewError::BlankDomain` for blank input, otherwise the mapped
/// service failure.
pub async fn start_journey(
    sessions: &SessionService,
    domain: &str,
) -> Result<QuizStart, ViewError> {
    sessions
        .start(domain)
        .await
        .map_err(|err| ViewError::from_service(Action::StartSession, &err))
}

/// # Errors
///
/// Returns the mapped service failure.
pub async fn submit_quiz(
    quiz: &QuizService,
    start: &QuizStart,
    answers: &[String],
) -> Result<String, ViewError> {
    quiz.submit(start, answers)
        .await
        .map_err(|err| ViewError::from_service(Action::SubmitQuiz, &err))
}

/// # Errors
///
/// Returns the mapped service failure.
pub async fn sync_task(
    roadmaps: &RoadmapService,
    session_id: &SessionId,
    toggle: &TaskToggle,
) -> Result<Week, ViewError> {
    roadmaps
        .update_task(session_id, toggle)
        .await
        .map_err(|err| ViewError::from_service(Action::UpdateTask, &err))
}

/// # Errors
///
/// Returns the mapped service failure.
pub async fn toggle_enrollment(
    tracks: &TrackService,
    track: &CareerTrack,
) -> Result<CareerTrack, ViewError> {
    tracks
        .toggle_enrollment(track)
        .await
        .map_err(|err| ViewError::from_service(Action::UpdateEnrollment, &err))
}
