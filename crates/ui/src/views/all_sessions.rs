use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Action, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionCardVm, map_session_cards};

#[derive(Clone, Debug, PartialEq)]
struct SessionsData {
    cards: Vec<SessionCardVm>,
}

#[component]
pub fn AllSessionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            let items = sessions
                .list_sessions()
                .await
                .map_err(|err| ViewError::from_service(Action::LoadSessions, &err))?;
            Ok(SessionsData {
                cards: map_session_cards(&items),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page all-sessions",
            h2 { class: "page-title", "All Previous Sessions" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading sessions..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "empty-state", "No sessions found." }
                    } else {
                        ul { class: "session-list",
                            for card in data.cards {
                                SessionCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-message", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn SessionCard(card: SessionCardVm) -> Element {
    rsx! {
        li { class: "card session-card",
            h3 { class: "card-title", "{card.domain}" }
            p { strong { "Level: " } "{card.level}" }
            p { strong { "Created: " } "{card.created_at_str}" }
            Link {
                class: "button",
                to: Route::SessionSummaryById { session_id: card.session_id.clone() },
                "View Summary"
            }
        }
    }
}
