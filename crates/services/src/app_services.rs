use std::sync::Arc;

use storage::repository::Storage;

use crate::api::PathfinderApi;
use crate::quiz_service::QuizService;
use crate::roadmap_service::RoadmapService;
use crate::session_service::SessionService;
use crate::track_service::TrackService;

/// Assembles the app-facing services over one backend and one store.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionService>,
    quiz: Arc<QuizService>,
    tracks: Arc<TrackService>,
    roadmaps: Arc<RoadmapService>,
}

impl AppServices {
    #[must_use]
    pub fn new(api: Arc<dyn PathfinderApi>, storage: &Storage) -> Self {
        let store = Arc::clone(&storage.sessions);
        Self {
            sessions: Arc::new(SessionService::new(Arc::clone(&api), Arc::clone(&store))),
            quiz: Arc::new(QuizService::new(Arc::clone(&api), Arc::clone(&store))),
            tracks: Arc::new(TrackService::new(Arc::clone(&api), Arc::clone(&store))),
            roadmaps: Arc::new(RoadmapService::new(api, store)),
        }
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
}
