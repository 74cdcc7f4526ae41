//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use pathfinder_core::model::{DomainError, QuizError};
use pathfinder_core::roadmap::RoadmapError;
use storage::repository::StorageError;

/// Errors emitted by `PathfinderApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Text to show the user: the server's `detail` when it sent one,
    /// otherwise the error itself.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors emitted by the workflow services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("no session identifier is stored")]
    MissingSession,
    #[error("career track has no identifier")]
    MissingTrackId,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Api(err) => err.detail(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_server_text() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            detail: Some("Session not found.".into()),
        };
        assert_eq!(err.detail(), "Session not found.");
        assert_eq!(ServiceError::from(err).detail(), "Session not found.");
    }

    #[test]
    fn detail_falls_back_to_error_text() {
        let err = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        };
        assert_eq!(err.detail(), "request failed with status 502 Bad Gateway");
        assert_eq!(
            ServiceError::MissingSession.detail(),
            "no session identifier is stored"
        );
    }
}
