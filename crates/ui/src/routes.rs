use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    AllSessionsView, CareerTracksView, DomainSelectionView, NotFoundView, QuizView, RoadmapView,
    SessionSummaryByIdView, SessionSummaryView, TrackerView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DomainSelectionView)] DomainSelection {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/career-tracks", CareerTracksView)] CareerTracks {},
        #[route("/roadmap/:track_id", RoadmapView)] Roadmap { track_id: String },
        #[route("/tracker", TrackerView)] Tracker {},
        #[route("/session-summary", SessionSummaryView)] SessionSummary {},
        #[route("/session-summary/:session_id", SessionSummaryByIdView)] SessionSummaryById { session_id: String },
        #[route("/all-sessions", AllSessionsView)] AllSessions {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            Link { class: "logo", to: Route::DomainSelection {}, "Career Pathfinder" }
            nav { class: "nav",
                Link { class: "nav-link", to: Route::AllSessions {}, "All Learning" }
                Link { class: "nav-link", to: Route::Tracker {}, "Tracker" }
                Link { class: "nav-link", to: Route::SessionSummary {}, "Summary" }
            }
        }
    }
}

#[component]
pub(crate) fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let year = ctx.clock().year();
    rsx! {
        footer { class: "footer",
            p { "© {year} Career Pathfinder" }
        }
    }
}
