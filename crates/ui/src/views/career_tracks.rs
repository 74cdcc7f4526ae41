use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Action, ViewError, ViewState, view_state_from_resource};
use crate::vm::{TrackCardVm, enrollment_badge, map_track_cards};

#[derive(Clone, Debug, PartialEq)]
struct TracksData {
    cards: Vec<TrackCardVm>,
}

#[component]
pub fn CareerTracksView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracks = ctx.tracks();
    let level = ctx.detected_level();

    let resource = use_resource(move || {
        let tracks = tracks.clone();
        async move {
            let items = tracks
                .list_for_current_session()
                .await
                .map_err(|err| ViewError::from_service(Action::LoadTracks, &err))?;
            Ok(TracksData {
                cards: map_track_cards(&items),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page career-tracks",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading career tracks..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-message", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "empty-state",
                            "No career tracks recommended yet. Please complete the quiz."
                        }
                    } else {
                        h2 { class: "page-title", "Recommended Career Tracks" }
                        if let Some(level) = level.clone() {
                            p { class: "detected-level", "Your detected level: {level}" }
                        }
                        div { class: "track-grid",
                            for card in data.cards {
                                TrackCard { card }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TrackCard(card: TrackCardVm) -> Element {
    let badge = enrollment_badge(card.is_enrolled);
    rsx! {
        div { class: "card track-card",
            h3 { class: "card-title", "{card.title}" }
            span {
                class: if card.is_enrolled { "badge enrolled" } else { "badge" },
                "{badge}"
            }
            p { strong { "Avg. Salary: " } "{card.avg_salary}" }
            p { strong { "Key Skills: " } "{card.skills}" }
            p { strong { "Essential Tools: " } "{card.tools}" }
            p { strong { "Growth Path: " } "{card.growth}" }
            if let Some(track_id) = card.id.clone() {
                Link { class: "button", to: Route::Roadmap { track_id }, "View Roadmap" }
            } else {
                span { class: "button disabled", "Roadmap unavailable" }
            }
        }
    }
}
