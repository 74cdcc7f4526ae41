use dioxus::prelude::*;
use dioxus_router::Link;

use pathfinder_core::model::{SessionId, Week};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::use_task_toggle;
use crate::views::{Action, ErrorBanner, RoadmapBoard, ViewError, ViewState, view_state_from_resource};

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let roadmaps = ctx.roadmaps();

    let title = use_signal(|| None::<String>);
    let weeks = use_signal(Vec::<Week>::new);
    let session_id = use_signal(|| None::<SessionId>);
    let error = use_signal(|| None::<ViewError>);

    let resource = use_resource(move || {
        let roadmaps = roadmaps.clone();
        let mut title = title;
        let mut weeks = weeks;
        let mut session_id = session_id;

        async move {
            let summary = roadmaps
                .tracker_summary()
                .await
                .map_err(|err| ViewError::from_service(Action::LoadTracker, &err))?;
            let active = summary.active_track();
            title.set(active.map(|track| track.title.clone()));
            weeks.set(active.map(|track| track.weeks().to_vec()).unwrap_or_default());
            session_id.set(Some(summary.session_id));
            Ok::<_, ViewError>(())
        }
    });

    let on_toggle = use_task_toggle(weeks, session_id, error);

    let state = view_state_from_resource(&resource);
    let active_title = title.read().clone();

    rsx! {
        div { class: "page tracker",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading tracker..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-message", "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(track_title) = active_title {
                        h2 { class: "page-title", "Progress Tracker for: {track_title}" }
                        ErrorBanner { error }
                        RoadmapBoard { weeks, on_toggle }
                    } else {
                        div { class: "empty-state",
                            p {
                                "No active roadmap found. Please ensure you have selected a domain, completed the quiz, and generated a roadmap."
                            }
                            Link { class: "button", to: Route::DomainSelection {}, "Start New Journey" }
                        }
                    }
                },
            }
        }
    }
}
