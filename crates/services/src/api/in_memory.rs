use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Duration;
use reqwest::StatusCode;

use pathfinder_core::Clock;
use pathfinder_core::model::{
    CareerTrack, Domain, LevelPrediction, NEXT_STEP_TRACKS, Question, QuizAnswer, QuizId,
    QuizStart, SessionDetails, SessionId, SessionSummary, TrackId, TrackRoadmap, Week,
};
use pathfinder_core::roadmap::TaskUpdate;

use super::PathfinderApi;
use crate::error::ApiError;

/// Backend operations, used to inject failures and to inspect call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    InitDomain,
    SubmitAnswers,
    CareerTracks,
    Roadmap,
    Tracker,
    UpdateTask,
    SessionSummary,
    SessionDetails,
    Sessions,
    Enrollment,
}

struct State {
    clock: Clock,
    next_id: u64,
    questions: Vec<Question>,
    scored_level: Option<String>,
    recommended: Vec<CareerTrack>,
    roadmap_template: Vec<Week>,
    sessions: Vec<SessionSummary>,
    failures: HashMap<Endpoint, (StatusCode, String)>,
    calls: Vec<Endpoint>,
}

/// In-process stand-in for the backend, for tests and offline prototyping.
///
/// It keeps sessions, tracks and roadmaps in memory and answers the same way
/// the real service does, including its `detail` error texts. Any endpoint
/// can be made to fail with [`InMemoryPathfinderApi::fail`].
#[derive(Clone)]
pub struct InMemoryPathfinderApi {
    state: Arc<Mutex<State>>,
}

impl InMemoryPathfinderApi {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                clock,
                next_id: 1,
                questions: Vec::new(),
                scored_level: Some("Intermediate".into()),
                recommended: Vec::new(),
                roadmap_template: Vec::new(),
                sessions: Vec::new(),
                failures: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Questions handed out by `init_domain`.
    #[must_use]
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        self.lock().questions = questions;
        self
    }

    /// Tracks recommended to any scored session that has none yet.
    #[must_use]
    pub fn with_recommendations(self, tracks: Vec<CareerTrack>) -> Self {
        self.lock().recommended = tracks;
        self
    }

    /// Roadmap generated for tracks that do not have one.
    #[must_use]
    pub fn with_roadmap_template(self, weeks: Vec<Week>) -> Self {
        self.lock().roadmap_template = weeks;
        self
    }

    #[must_use]
    pub fn with_session(self, session: SessionSummary) -> Self {
        self.lock().sessions.push(session);
        self
    }

    /// Level returned by `submit_answers`; `None` simulates a reply without one.
    pub fn score_as(&self, level: Option<&str>) {
        self.lock().scored_level = level.map(str::to_string);
    }

    /// Make `endpoint` answer with `status` and `detail` until recovered.
    pub fn fail(&self, endpoint: Endpoint, status: StatusCode, detail: &str) {
        self.lock()
            .failures
            .insert(endpoint, (status, detail.to_string()));
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.lock().failures.remove(&endpoint);
    }

    /// Every endpoint hit so far, in order, failed calls included.
    #[must_use]
    pub fn calls(&self) -> Vec<Endpoint> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn session(&self, id: &SessionId) -> Option<SessionSummary> {
        self.lock()
            .sessions
            .iter()
            .find(|session| &session.session_id == id)
            .cloned()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        state.calls.push(endpoint);
        if let Some((status, detail)) = state.failures.get(&endpoint) {
            return Err(ApiError::Status {
                status: *status,
                detail: Some(detail.clone()),
            });
        }
        Ok(state)
    }
}

fn not_found(detail: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::NOT_FOUND,
        detail: Some(detail.to_string()),
    }
}

impl State {
    fn session_mut(&mut self, id: &SessionId) -> Result<&mut SessionSummary, ApiError> {
        self.sessions
            .iter_mut()
            .find(|session| &session.session_id == id)
            .ok_or_else(|| not_found("Session not found."))
    }

    fn track_mut(&mut self, id: &TrackId) -> Result<&mut CareerTrack, ApiError> {
        self.sessions
            .iter_mut()
            .flat_map(|session| session.career_tracks.iter_mut())
            .find(|track| track.id.as_ref() == Some(id))
            .ok_or_else(|| not_found("Career track not found."))
    }

    fn issue_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        id
    }
}

/// Tracks travel without their roadmap outside of session summaries.
fn without_roadmap(track: &CareerTrack) -> CareerTrack {
    CareerTrack {
        roadmap: None,
        ..track.clone()
    }
}

#[async_trait]
impl PathfinderApi for InMemoryPathfinderApi {
    async fn init_domain(&self, domain: &Domain) -> Result<QuizStart, ApiError> {
        let mut state = self.enter(Endpoint::InitDomain)?;
        let session_id = SessionId::new(state.issue_id("session"));
        let quiz_id = QuizId::new(state.issue_id("quiz"));
        let created_at = state.clock.now();
        state.clock.advance(Duration::minutes(1));

        state.sessions.push(SessionSummary {
            session_id: session_id.clone(),
            domain: domain.as_str().to_string(),
            level: None,
            created_at,
            career_tracks: Vec::new(),
        });

        Ok(QuizStart {
            session_id,
            quiz_id,
            questions: state.questions.clone(),
        })
    }

    async fn submit_answers(
        &self,
        session_id: &SessionId,
        _quiz_id: &QuizId,
        _answers: &[QuizAnswer],
    ) -> Result<LevelPrediction, ApiError> {
        let mut state = self.enter(Endpoint::SubmitAnswers)?;
        let level = state.scored_level.clone();
        let session = state
            .session_mut(session_id)
            .map_err(|_| not_found("Quiz not found"))?;
        if level.is_some() {
            session.level.clone_from(&level);
        }
        Ok(LevelPrediction {
            next_step: level.as_ref().map(|_| NEXT_STEP_TRACKS.to_string()),
            level,
        })
    }

    async fn career_tracks(&self, session_id: &SessionId) -> Result<Vec<CareerTrack>, ApiError> {
        let mut state = self.enter(Endpoint::CareerTracks)?;
        let index = state
            .sessions
            .iter()
            .position(|session| &session.session_id == session_id)
            .ok_or_else(|| not_found("Session not found."))?;
        if state.sessions[index].level.is_none() {
            return Err(ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                detail: Some("User level not yet determined. Complete the quiz first.".into()),
            });
        }
        if state.sessions[index].career_tracks.is_empty() {
            let recommended = state.recommended.clone();
            let tracks: Vec<CareerTrack> = recommended
                .into_iter()
                .map(|track| CareerTrack {
                    id: Some(TrackId::new(state.issue_id("track"))),
                    ..track
                })
                .collect();
            state.sessions[index].career_tracks = tracks;
        }
        Ok(state.sessions[index]
            .career_tracks
            .iter()
            .map(without_roadmap)
            .collect())
    }

    async fn roadmap(&self, track_id: &TrackId) -> Result<TrackRoadmap, ApiError> {
        let mut state = self.enter(Endpoint::Roadmap)?;
        let template = state.roadmap_template.clone();
        let track = state.track_mut(track_id)?;
        if !track.has_roadmap() && !template.is_empty() {
            track.roadmap = Some(template);
        }
        Ok(TrackRoadmap {
            track: without_roadmap(track),
            roadmap: track.weeks().to_vec(),
        })
    }

    async fn tracker(&self, session_id: &SessionId) -> Result<Vec<Week>, ApiError> {
        let mut state = self.enter(Endpoint::Tracker)?;
        let session = state.session_mut(session_id)?;
        session
            .active_track()
            .map(|track| track.weeks().to_vec())
            .ok_or_else(|| not_found("No roadmap found for this session."))
    }

    async fn update_task(
        &self,
        session_id: &SessionId,
        update: &TaskUpdate,
    ) -> Result<Week, ApiError> {
        let mut state = self.enter(Endpoint::UpdateTask)?;
        let session = state.session_mut(session_id)?;
        let track = session
            .active_track_mut()
            .ok_or_else(|| not_found("No roadmap found for this session."))?;
        let week = track
            .roadmap
            .iter_mut()
            .flatten()
            .find(|week| week.week == update.week)
            .ok_or_else(|| not_found("Task or week not found in the roadmap."))?;
        let task = week
            .tasks
            .iter_mut()
            .find(|task| task.task == update.task)
            .ok_or_else(|| not_found("Task or week not found in the roadmap."))?;
        task.is_completed = update.status;
        task.resource_link.clone_from(&update.resource_link);
        Ok(week.clone())
    }

    async fn session_summary(&self, session_id: &SessionId) -> Result<SessionSummary, ApiError> {
        let mut state = self.enter(Endpoint::SessionSummary)?;
        state.session_mut(session_id).map(|session| session.clone())
    }

    async fn session_details(&self, session_id: &SessionId) -> Result<SessionDetails, ApiError> {
        let mut state = self.enter(Endpoint::SessionDetails)?;
        state.session_mut(session_id).map(|session| session.details())
    }

    async fn sessions(&self) -> Result<Vec<SessionDetails>, ApiError> {
        let state = self.enter(Endpoint::Sessions)?;
        Ok(state.sessions.iter().map(SessionSummary::details).collect())
    }

    async fn set_enrollment(
        &self,
        track_id: &TrackId,
        is_enrolled: bool,
    ) -> Result<CareerTrack, ApiError> {
        let mut state = self.enter(Endpoint::Enrollment)?;
        let track = state.track_mut(track_id)?;
        track.is_enrolled = is_enrolled;
        Ok(without_roadmap(track))
    }
}
