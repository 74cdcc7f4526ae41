#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod quiz_service;
pub mod roadmap_service;
pub mod session_service;
pub mod track_service;

pub use pathfinder_core::Clock;

pub use api::{ApiConfig, DEFAULT_API_URL, HttpPathfinderApi, PathfinderApi};
#[cfg(any(test, feature = "test-support"))]
pub use api::{Endpoint, InMemoryPathfinderApi};
pub use app_services::AppServices;
pub use error::{ApiError, ServiceError};
pub use quiz_service::QuizService;
pub use roadmap_service::RoadmapService;
pub use session_service::SessionService;
pub use track_service::TrackService;
