use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorBanner, ViewError};
use crate::vm::start_journey;

#[component]
pub fn DomainSelectionView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut domain = use_signal(String::new);
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let ctx = ctx.clone();
        let mut loading = loading;
        let mut error = error;
        loading.set(true);
        error.set(None);
        let typed = domain.peek().clone();
        spawn(async move {
            let sessions = ctx.sessions();
            match start_journey(&sessions, &typed).await {
                Ok(start) => {
                    ctx.set_detected_level(None);
                    ctx.set_pending_quiz(Some(start));
                    let _ = navigator.push(Route::Quiz {});
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "page domain-selection",
            h2 { class: "page-title", "Start Your Career Journey" }
            p { class: "description",
                "Tell us which field interests you. We will assess your current level with a short quiz and recommend career tracks with week-by-week roadmaps."
            }
            form { class: "domain-form", onsubmit: on_submit,
                label { r#for: "domain", "Domain of Interest" }
                input {
                    id: "domain",
                    r#type: "text",
                    required: true,
                    placeholder: "e.g., Frontend Developer, Data Scientist",
                    value: "{domain}",
                    disabled: loading(),
                    oninput: move |evt: FormEvent| domain.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Starting..." } else { "Start Quiz" }
                }
            }
            ErrorBanner { error }
        }
    }
}
