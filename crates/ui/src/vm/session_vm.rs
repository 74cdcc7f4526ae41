use pathfinder_core::model::{CareerTrack, SessionDetails, SessionSummary};

use crate::vm::time_fmt::format_datetime;

/// Weeks and tasks per week shown in a summary's roadmap preview.
pub const PREVIEW_WEEKS: usize = 2;
pub const PREVIEW_TASKS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCardVm {
    pub session_id: String,
    pub domain: String,
    pub level: String,
    pub created_at_str: String,
}

impl From<&SessionDetails> for SessionCardVm {
    fn from(details: &SessionDetails) -> Self {
        Self {
            session_id: details.session_id.as_str().to_string(),
            domain: details.domain.clone(),
            level: details.level.clone().unwrap_or_else(|| "N/A".into()),
            created_at_str: format_datetime(details.created_at),
        }
    }
}

#[must_use]
pub fn map_session_cards(sessions: &[SessionDetails]) -> Vec<SessionCardVm> {
    sessions.iter().map(SessionCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekPreviewVm {
    pub number: u32,
    pub tasks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackPreviewVm {
    pub title: String,
    pub avg_salary: String,
    pub skills: String,
    pub is_enrolled: bool,
    pub weeks: Vec<WeekPreviewVm>,
}

impl From<&CareerTrack> for TrackPreviewVm {
    fn from(track: &CareerTrack) -> Self {
        Self {
            title: track.title.clone(),
            avg_salary: track.avg_salary.clone(),
            skills: track.skills.join(", "),
            is_enrolled: track.is_enrolled,
            weeks: track
                .weeks()
                .iter()
                .take(PREVIEW_WEEKS)
                .map(|week| WeekPreviewVm {
                    number: week.week,
                    tasks: week
                        .tasks
                        .iter()
                        .take(PREVIEW_TASKS)
                        .map(|task| task.task.clone())
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub domain: String,
    pub level: String,
    pub started_at_str: String,
    pub tracks: Vec<TrackPreviewVm>,
}

impl From<&SessionSummary> for SummaryVm {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            domain: summary.domain.clone(),
            level: summary
                .level
                .clone()
                .unwrap_or_else(|| "Not yet determined".into()),
            started_at_str: format_datetime(summary.created_at),
            tracks: summary.career_tracks.iter().map(TrackPreviewVm::from).collect(),
        }
    }
}
