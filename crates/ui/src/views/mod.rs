mod all_sessions;
mod career_tracks;
mod components;
mod domain_selection;
mod not_found;
mod quiz;
mod roadmap;
mod session_summary;
mod state;
mod tracker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use all_sessions::AllSessionsView;
pub use career_tracks::CareerTracksView;
pub use components::{ErrorBanner, RoadmapBoard};
pub use domain_selection::DomainSelectionView;
pub use not_found::NotFoundView;
pub use quiz::QuizView;
pub use roadmap::RoadmapView;
pub use session_summary::{SessionSummaryByIdView, SessionSummaryView};
pub use state::{Action, ViewError, ViewState, view_state_from_resource};
pub use tracker::TrackerView;
