use std::sync::{Arc, Mutex, PoisonError};

use pathfinder_core::model::QuizStart;
use services::{Clock, QuizService, RoadmapService, SessionService, TrackService};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn sessions(&self) -> Arc<SessionService>;
    fn quiz(&self) -> Arc<QuizService>;
    fn tracks(&self) -> Arc<TrackService>;
    fn roadmaps(&self) -> Arc<RoadmapService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,

    sessions: Arc<SessionService>,
    quiz: Arc<QuizService>,
    tracks: Arc<TrackService>,
    roadmaps: Arc<RoadmapService>,

    // Navigation state between pages; never persisted.
    pending_quiz: Arc<Mutex<Option<QuizStart>>>,
    detected_level: Arc<Mutex<Option<String>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            sessions: app.sessions(),
            quiz: app.quiz(),
            tracks: app.tracks(),
            roadmaps: app.roadmaps(),
            pending_quiz: Arc::new(Mutex::new(None)),
            detected_level: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn tracks(&self) -> Arc<TrackService> {
        Arc::clone(&self.tracks)
    }

    #[must_use]
    pub fn roadmaps(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmaps)
    }

    /// Quiz handed over by the domain selection page.
    #[must_use]
    pub fn pending_quiz(&self) -> Option<QuizStart> {
        self.pending_quiz
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_pending_quiz(&self, quiz: Option<QuizStart>) {
        *self
            .pending_quiz
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = quiz;
    }

    /// Level from the last scored quiz, shown on the career tracks page.
    #[must_use]
    pub fn detected_level(&self) -> Option<String> {
        self.detected_level
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_detected_level(&self, level: Option<String>) {
        *self
            .detected_level
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = level;
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
