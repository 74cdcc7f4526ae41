use dioxus::prelude::*;

use pathfinder_core::model::QuizError;
use services::ServiceError;

/// What the user was doing when a request failed; picks the message prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartSession,
    SubmitQuiz,
    LoadTracks,
    LoadRoadmap,
    LoadTracker,
    UpdateTask,
    UpdateEnrollment,
    LoadSummary,
    LoadSessions,
}

impl Action {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Action::StartSession => "Failed to start session. Please try again.",
            Action::SubmitQuiz => "Failed to submit quiz. Please try again.",
            Action::LoadTracks => "Failed to load career tracks.",
            Action::LoadRoadmap => "Failed to load roadmap.",
            Action::LoadTracker => "Failed to load session data.",
            Action::UpdateTask => "Failed to update task.",
            Action::UpdateEnrollment => "Failed to update enrollment.",
            Action::LoadSummary => "Failed to load session summary.",
            Action::LoadSessions => "Failed to load all sessions.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    MissingSession,
    MissingTrackId,
    BlankDomain,
    IncompleteAnswers,
    LevelNotDetermined,
    Failed { action: Action, detail: String },
}

impl ViewError {
    /// Map a service failure to what the page shows.
    #[must_use]
    pub fn from_service(action: Action, err: &ServiceError) -> Self {
        match err {
            ServiceError::MissingSession => ViewError::MissingSession,
            ServiceError::MissingTrackId => ViewError::MissingTrackId,
            ServiceError::Domain(_) => ViewError::BlankDomain,
            ServiceError::Quiz(QuizError::LevelNotDetermined) => ViewError::LevelNotDetermined,
            ServiceError::Quiz(_) => ViewError::IncompleteAnswers,
            other => ViewError::Failed {
                action,
                detail: other.detail(),
            },
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::MissingSession => {
                "Session not found. Please start from the Domain Selection.".into()
            }
            ViewError::MissingTrackId => "No track ID provided for roadmap.".into(),
            ViewError::BlankDomain => "Please enter a domain of interest.".into(),
            ViewError::IncompleteAnswers => {
                "Please answer all questions before submitting.".into()
            }
            ViewError::LevelNotDetermined => {
                "Quiz submission failed or level not determined.".into()
            }
            ViewError::Failed { action, detail } => format!("{} {detail}", action.prefix()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
