use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SessionId;
use crate::model::timestamp;
use crate::model::track::CareerTrack;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    #[error("domain of interest cannot be empty")]
    Empty,
}

/// Validated domain of interest (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// # Errors
    ///
    /// Returns `DomainError::Empty` if the value is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic session facts as listed by `/sessions` and `/session/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    pub session_id: SessionId,
    pub domain: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Everything known about one session, tracks and roadmaps included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub domain: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub career_tracks: Vec<CareerTrack>,
}

impl SessionSummary {
    #[must_use]
    pub fn details(&self) -> SessionDetails {
        SessionDetails {
            session_id: self.session_id.clone(),
            domain: self.domain.clone(),
            level: self.level.clone(),
            created_at: self.created_at,
        }
    }

    /// The track the progress tracker follows: the first one with a roadmap.
    #[must_use]
    pub fn active_track(&self) -> Option<&CareerTrack> {
        self.career_tracks.iter().find(|track| track.has_roadmap())
    }

    #[must_use]
    pub fn active_track_mut(&mut self) -> Option<&mut CareerTrack> {
        self.career_tracks.iter_mut().find(|track| track.has_roadmap())
    }
}

/// Order sessions newest first. Ties keep their incoming order.
pub fn sort_newest_first(sessions: &mut [SessionDetails]) {
    sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
