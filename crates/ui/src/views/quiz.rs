use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorBanner, ViewError};
use crate::vm::submit_quiz;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = use_hook(|| ctx.pending_quiz());

    let question_count = quiz.as_ref().map_or(0, |quiz| quiz.questions.len());
    let answers = use_signal(|| vec![String::new(); question_count]);
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);

    let Some(quiz) = quiz.filter(|quiz| !quiz.questions.is_empty()) else {
        return rsx! {
            div { class: "page quiz",
                p { class: "empty-state",
                    "No quiz questions found. Please return to the homepage to start a new session."
                }
                Link { to: Route::DomainSelection {}, "Back to Domain Selection" }
            }
        };
    };

    let on_submit = {
        let quiz = quiz.clone();
        move |_: MouseEvent| {
            if loading() {
                return;
            }
            let ctx = ctx.clone();
            let quiz = quiz.clone();
            let mut loading = loading;
            let mut error = error;
            loading.set(true);
            error.set(None);
            spawn(async move {
                let service = ctx.quiz();
                let submitted = answers.peek().to_vec();
                match submit_quiz(&service, &quiz, &submitted).await {
                    Ok(level) => {
                        ctx.set_detected_level(Some(level));
                        let _ = navigator.push(Route::CareerTracks {});
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div { class: "page quiz",
            h2 { class: "page-title", "Skill Assessment Quiz" }
            p { class: "instructions",
                "Answer each question in your own words. Your answers are used to estimate your current level."
            }
            ol { class: "question-list",
                for (index, question) in quiz.questions.iter().cloned().enumerate() {
                    li { key: "{question.id}", class: "question",
                        label { r#for: "question-{index}", class: "question-text", "{question.question}" }
                        textarea {
                            id: "question-{index}",
                            rows: "3",
                            placeholder: "Type your answer here...",
                            value: answers.read().get(index).cloned().unwrap_or_default(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| {
                                let mut answers = answers;
                                if let Some(slot) = answers.write().get_mut(index) {
                                    *slot = evt.value();
                                }
                            },
                        }
                    }
                }
            }
            ErrorBanner { error }
            button {
                class: "primary",
                r#type: "button",
                disabled: loading(),
                onclick: on_submit,
                if loading() { "Submitting..." } else { "Submit Answers" }
            }
        }
    }
}
