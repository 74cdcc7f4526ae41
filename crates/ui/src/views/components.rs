use dioxus::prelude::*;

use pathfinder_core::model::{SessionId, Week};
use pathfinder_core::roadmap::apply_toggle;

use crate::context::AppContext;
use crate::views::{Action, ViewError};
use crate::vm::{map_weeks, overall_progress_label, resolve_toggle, sync_task};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Inline error message with a dismiss button.
#[component]
pub fn ErrorBanner(error: Signal<Option<ViewError>>) -> Element {
    let current = error.read().clone();
    rsx! {
        if let Some(err) = current {
            div { class: "error-banner", role: "alert",
                span { "{err.message()}" }
                button {
                    class: "error-dismiss",
                    r#type: "button",
                    onclick: move |_| {
                        let mut error = error;
                        error.set(None);
                    },
                    "Dismiss"
                }
            }
        }
    }
}

/// Optimistic checkbox toggle shared by the roadmap and tracker pages.
///
/// The flip is written to `weeks` before the request is sent; the server
/// reply then either replaces the week or rolls the task back.
pub(crate) fn use_task_toggle(
    weeks: Signal<Vec<Week>>,
    session_id: Signal<Option<SessionId>>,
    error: Signal<Option<ViewError>>,
) -> Callback<(usize, usize)> {
    let ctx = use_context::<AppContext>();
    let roadmaps = ctx.roadmaps();

    let toggle = use_callback(move |(week_index, task_index): (usize, usize)| {
        let mut weeks = weeks;
        let mut error = error;

        let Some(session_id) = session_id.peek().as_ref().cloned() else {
            error.set(Some(ViewError::MissingSession));
            return;
        };
        let current = weeks.peek().to_vec();
        let (optimistic, toggle) = match apply_toggle(&current, week_index, task_index) {
            Ok(applied) => applied,
            Err(err) => {
                error.set(Some(ViewError::Failed {
                    action: Action::UpdateTask,
                    detail: err.to_string(),
                }));
                return;
            }
        };
        weeks.set(optimistic);

        let roadmaps = roadmaps.clone();
        spawn(async move {
            let result = sync_task(&roadmaps, &session_id, &toggle).await;
            let latest = weeks.peek().to_vec();
            let (settled, failure) = resolve_toggle(&latest, &toggle, result);
            weeks.set(settled);
            if failure.is_some() {
                error.set(failure);
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ToggleTestHandles>() {
                handles.register(toggle, weeks);
            }
        }
    }

    toggle
}

#[component]
pub fn RoadmapBoard(weeks: Signal<Vec<Week>>, on_toggle: Callback<(usize, usize)>) -> Element {
    let current = weeks.read().clone();
    let cards = map_weeks(&current);
    let overall = overall_progress_label(&current);

    rsx! {
        p { class: "roadmap-progress", "{overall}" }
        ol { class: "timeline",
            for week in cards {
                li { key: "{week.number}", class: "timeline-item",
                    span { class: week.status_class(), "{week.bullet()}" }
                    div { class: "week-content",
                        h3 { class: "week-title", "Week {week.number}" }
                        p { class: "week-progress", "{week.progress_label}" }
                        if week.tasks.is_empty() {
                            p { class: "no-tasks", "No tasks for this week." }
                        } else {
                            ul { class: "task-list",
                                for task in week.tasks.clone() {
                                    li { class: "task-item",
                                        label { class: "task-label",
                                            input {
                                                r#type: "checkbox",
                                                checked: task.is_completed,
                                                onchange: move |_| on_toggle.call((task.week_index, task.task_index)),
                                            }
                                            span {
                                                class: if task.is_completed { "task-text completed" } else { "task-text" },
                                                "{task.text}"
                                            }
                                        }
                                        if let Some(url) = task.resource_url.clone() {
                                            a {
                                                class: "resource-link",
                                                href: "{url}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                "Resource"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ToggleTestHandles {
    toggle: Rc<RefCell<Option<Callback<(usize, usize)>>>>,
    weeks: Rc<RefCell<Option<Signal<Vec<Week>>>>>,
}

#[cfg(test)]
impl ToggleTestHandles {
    pub(crate) fn register(&self, toggle: Callback<(usize, usize)>, weeks: Signal<Vec<Week>>) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.weeks.borrow_mut() = Some(weeks);
    }

    pub(crate) fn toggle(&self) -> Callback<(usize, usize)> {
        (*self.toggle.borrow()).expect("toggle registered")
    }

    pub(crate) fn weeks(&self) -> Signal<Vec<Week>> {
        (*self.weeks.borrow()).expect("weeks registered")
    }
}
