use dioxus::prelude::*;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use pathfinder_core::model::{CareerTrack, SessionId, TrackId, Week};

use crate::context::AppContext;
use crate::views::components::use_task_toggle;
use crate::views::{Action, ErrorBanner, RoadmapBoard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{enrollment_action, enrollment_badge, toggle_enrollment};

#[component]
pub fn RoadmapView(track_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let roadmaps = ctx.roadmaps();
    let sessions = ctx.sessions();
    let tracks = ctx.tracks();

    let track = use_signal(|| None::<CareerTrack>);
    let weeks = use_signal(Vec::<Week>::new);
    let session_id = use_signal(|| None::<SessionId>);
    let error = use_signal(|| None::<ViewError>);
    let enrolling = use_signal(|| false);

    let resource = use_resource(move || {
        let roadmaps = roadmaps.clone();
        let sessions = sessions.clone();
        let track_id = track_id.clone();
        let mut track = track;
        let mut weeks = weeks;
        let mut session_id = session_id;

        async move {
            let track_id = track_id.trim();
            if track_id.is_empty() {
                return Err(ViewError::MissingTrackId);
            }
            let loaded = roadmaps
                .load(&TrackId::new(track_id))
                .await
                .map_err(|err| ViewError::from_service(Action::LoadRoadmap, &err))?;
            let stored = sessions
                .current_session_id()
                .await
                .map_err(|err| ViewError::from_service(Action::LoadRoadmap, &err))?;

            session_id.set(stored);
            weeks.set(loaded.roadmap);
            track.set(Some(loaded.track));
            Ok::<_, ViewError>(())
        }
    });

    let on_toggle = use_task_toggle(weeks, session_id, error);

    let on_enroll = use_callback(move |()| {
        if *enrolling.peek() {
            return;
        }
        let Some(current) = track.peek().as_ref().cloned() else {
            return;
        };
        let tracks = tracks.clone();
        let mut track = track;
        let mut error = error;
        let mut enrolling = enrolling;
        enrolling.set(true);
        spawn(async move {
            match toggle_enrollment(&tracks, &current).await {
                Ok(updated) => {
                    track.set(Some(updated));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
            enrolling.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<EnrollTestHandles>() {
                handles.register(on_enroll);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let current_track = track.read().clone();
    let enrolled = current_track.as_ref().is_some_and(|track| track.is_enrolled);
    let badge = enrollment_badge(enrolled);
    let enroll_label = enrollment_action(enrolled);
    let has_weeks = !weeks.read().is_empty();

    rsx! {
        div { class: "page roadmap",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading roadmap..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-message", "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    h2 { class: "page-title", "Your Personalized Roadmap" }
                    if let Some(current) = current_track {
                        div { class: "track-header",
                            h3 { "{current.title}" }
                            span {
                                class: if enrolled { "badge enrolled" } else { "badge" },
                                "{badge}"
                            }
                            button {
                                class: "secondary",
                                r#type: "button",
                                disabled: enrolling(),
                                onclick: move |_| on_enroll.call(()),
                                "{enroll_label}"
                            }
                        }
                    }
                    ErrorBanner { error }
                    if has_weeks {
                        RoadmapBoard { weeks, on_toggle }
                    } else {
                        p { class: "empty-state", "No roadmap generated for this track yet." }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct EnrollTestHandles {
    enroll: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl EnrollTestHandles {
    pub(crate) fn register(&self, enroll: Callback<()>) {
        *self.enroll.borrow_mut() = Some(enroll);
    }

    pub(crate) fn enroll(&self) -> Callback<()> {
        (*self.enroll.borrow()).expect("enroll registered")
    }
}
