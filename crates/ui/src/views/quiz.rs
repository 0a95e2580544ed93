use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, actions};
use crate::vm::{QuizVm, render_markup};

#[component]
pub fn QuizArea() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<QuizVm>>();
    let state = vm();

    let submit_backend = ctx.backend();
    let next_backend = ctx.backend();
    let retry_backend = ctx.backend();
    let about_backend = ctx.backend();
    let eli5_backend = ctx.backend();

    let topic = state
        .current_topic()
        .map(ToString::to_string)
        .unwrap_or_default();
    let score = state.score();
    let submit_enabled = state.submit_enabled();
    let has_question = state.question().ready().is_some();
    let area_class = if state.is_submitting() {
        "quiz-area loading"
    } else {
        "quiz-area"
    };
    let submit_label = if state.is_submitting() {
        "Checking..."
    } else {
        "Submit answer"
    };

    rsx! {
        section { id: "quiz-area", class: "{area_class}",
            header { class: "quiz-header",
                h2 { id: "current-topic", "Topic: {topic}" }
                div { class: "score",
                    span { class: "score-correct", "Correct: " span { id: "correct-count", "{score.correct()}" } }
                    span { class: "score-incorrect", "Incorrect: " span { id: "incorrect-count", "{score.incorrect()}" } }
                }
                div { class: "quiz-header-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: state.topic_explanation().is_loading(),
                        onclick: move |_| actions::explain_topic(vm, about_backend.clone()),
                        "About this topic"
                    }
                    button {
                        id: "change-topic",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| vm.write().change_topic(),
                        "Change topic"
                    }
                }
            }
            match state.topic_explanation() {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "topic-explanation loading", "Loading explanation..." }
                },
                ViewState::Ready(text) => rsx! {
                    div { class: "topic-explanation", dangerous_inner_html: render_markup(text) }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "topic-explanation error", "{err.message()}" }
                },
            }
            div { id: "question-text", class: "question",
                match state.question() {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "Loading question..." }
                    },
                    ViewState::Ready(question) => rsx! {
                        div { class: "question-body", dangerous_inner_html: render_markup(question) }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error question-error", "{err.message()}" }
                        button {
                            id: "retry-question",
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| actions::next_question(vm, retry_backend.clone()),
                            "Try again"
                        }
                    },
                }
            }
            textarea {
                id: "answer-input",
                class: "answer-input",
                placeholder: "Your answer",
                disabled: !submit_enabled,
                value: "{state.answer()}",
                oninput: move |evt| vm.write().set_answer(evt.value()),
            }
            div { class: "quiz-actions",
                button {
                    id: "submit-answer",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !submit_enabled,
                    onclick: move |_| actions::submit_answer(vm, submit_backend.clone()),
                    "{submit_label}"
                }
                button {
                    id: "chat-button",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| vm.write().chat_mut().open(),
                    "Ask a follow-up"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !has_question || state.chat().is_pending(),
                    onclick: move |_| actions::explain_like_five(vm, eli5_backend.clone()),
                    "ELI5"
                }
            }
            if let Some(err) = state.submit_error() {
                p { class: "error submit-error", "{err.message()}" }
            }
            if let Some(result) = state.result() {
                div { id: "result-container", class: "result",
                    p {
                        id: "result-text",
                        class: if result.correct { "correct" } else { "incorrect" },
                        "{result.label()}"
                    }
                    div {
                        id: "explanation-text",
                        class: "explanation",
                        dangerous_inner_html: render_markup(&result.explanation),
                    }
                }
                button {
                    id: "next-question",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| actions::next_question(vm, next_backend.clone()),
                    "Next question"
                }
            }
        }
    }
}
