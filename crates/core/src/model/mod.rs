mod ids;
mod quiz;
mod session;
pub mod timestamp;
mod track;

pub use ids::{QuizId, SessionId, TrackId};
pub use quiz::{
    LevelPrediction, NEXT_STEP_TRACKS, Question, QuizAnswer, QuizError, QuizStart, pair_answers,
};
pub use session::{Domain, DomainError, SessionDetails, SessionSummary, sort_newest_first};
pub use track::{CareerTrack, Task, Week};

use serde::{Deserialize, Serialize};

/// `/roadmap/{trackId}` response: a track and its (possibly fresh) roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRoadmap {
    pub track: CareerTrack,
    #[serde(default)]
    pub roadmap: Vec<Week>,
}
