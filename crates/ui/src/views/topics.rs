use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, actions};
use crate::vm::QuizVm;

#[component]
pub fn TopicSelection() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<QuizVm>>();
    let state = vm();

    let add_backend = ctx.backend();
    let retry_backend = ctx.backend();

    let topic_buttons = state.topics().ready().cloned().unwrap_or_default();
    let topic_buttons = topic_buttons.into_iter().map(|topic| {
        let label = topic.to_string();
        let select_backend = ctx.backend();
        let delete_backend = ctx.backend();
        let select_topic = topic.clone();
        rsx! {
            li { key: "{label}", class: "topic-item",
                button {
                    class: "btn topic-button",
                    r#type: "button",
                    onclick: move |_| {
                        actions::select_topic(vm, select_backend.clone(), select_topic.clone());
                    },
                    "{label}"
                }
                button {
                    class: "btn btn-danger topic-delete",
                    r#type: "button",
                    title: "Delete topic",
                    disabled: state.topic_busy(),
                    onclick: move |_| {
                        actions::delete_topic(vm, delete_backend.clone(), topic.clone());
                    },
                    "×"
                }
            }
        }
    });

    rsx! {
        section { id: "topic-selection", class: "topic-selection",
            h2 { "Choose a topic" }
            match state.topics() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading topics..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| actions::load_topics(vm, retry_backend.clone()),
                        "Retry"
                    }
                },
                ViewState::Ready(topics) if topics.is_empty() => rsx! {
                    p { class: "empty", "No topics yet. Add one below." }
                },
                ViewState::Ready(_) => rsx! {
                    ul { id: "topics-list", class: "topics-list", {topic_buttons} }
                },
            }
            form {
                class: "topic-add",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    actions::add_topic(vm, add_backend.clone());
                },
                input {
                    r#type: "text",
                    placeholder: "New topic",
                    value: "{state.new_topic()}",
                    oninput: move |evt| vm.write().set_new_topic(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.topic_busy(),
                    "Add topic"
                }
            }
            if let Some(err) = state.topic_error() {
                p { class: "error topic-error", "{err.message()}" }
            }
        }
    }
}
