use dioxus::prelude::*;
use dioxus_router::Link;

use pathfinder_core::model::SessionId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Action, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SummaryVm, TrackPreviewVm};

/// Summary of the stored session.
#[component]
pub fn SessionSummaryView() -> Element {
    rsx! {
        SummaryPage { session_id: None }
    }
}

/// Summary of the session named in the route.
#[component]
pub fn SessionSummaryByIdView(session_id: String) -> Element {
    rsx! {
        SummaryPage { session_id: Some(session_id) }
    }
}

#[component]
fn SummaryPage(session_id: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        let explicit = session_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(SessionId::new);

        async move {
            let summary = sessions
                .summary(explicit)
                .await
                .map_err(|err| ViewError::from_service(Action::LoadSummary, &err))?;
            Ok::<_, ViewError>(SummaryVm::from(&summary))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page session-summary",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading session summary..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-message", "{err.message()}" }
                },
                ViewState::Ready(summary) => rsx! {
                    SummaryDetails { summary }
                },
            }
        }
    }
}

#[component]
fn SummaryDetails(summary: SummaryVm) -> Element {
    rsx! {
        div { class: "summary-header",
            h2 { class: "page-title", "Full Session Summary" }
            dl { class: "summary",
                dt { "Domain" }
                dd { "{summary.domain}" }

                dt { "Detected Level" }
                dd { "{summary.level}" }

                dt { "Started At" }
                dd { "{summary.started_at_str}" }
            }
        }

        h3 { class: "section-title", "Recommended Career Tracks" }
        if summary.tracks.is_empty() {
            p { class: "empty-section", "No career tracks recommended yet." }
        } else {
            div { class: "track-grid",
                for track in summary.tracks {
                    TrackPreview { track }
                }
            }
        }

        Link { class: "button", to: Route::DomainSelection {}, "Start Another Journey" }
    }
}

#[component]
fn TrackPreview(track: TrackPreviewVm) -> Element {
    rsx! {
        div { class: "card track-preview",
            h4 { class: "card-title", "{track.title}" }
            if track.is_enrolled {
                span { class: "badge enrolled", "Enrolled" }
            }
            p { strong { "Avg. Salary: " } "{track.avg_salary}" }
            p { strong { "Skills: " } "{track.skills}" }
            if track.weeks.is_empty() {
                p { class: "no-roadmap", "No roadmap generated yet." }
            } else {
                div { class: "roadmap-preview",
                    for week in track.weeks {
                        div { key: "{week.number}", class: "week-preview",
                            h5 { "Week {week.number}" }
                            ul {
                                for task in week.tasks {
                                    li { "{task}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
