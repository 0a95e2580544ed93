use dioxus::prelude::*;
use quiz_core::model::ChatSender;

use crate::context::AppContext;
use crate::views::actions;
use crate::vm::{QuizVm, render_markup};

#[component]
pub fn ChatPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<QuizVm>>();
    let state = vm();
    let chat = state.chat();
    let send_backend = ctx.backend();
    let can_send = state.current_topic().is_some() && !chat.is_pending();

    let messages = chat.log().messages().iter().enumerate().map(|(idx, message)| {
        let class = match message.sender {
            ChatSender::User => "chat-message chat-message--user",
            ChatSender::Ai => "chat-message chat-message--ai",
        };
        let label = message.sender.label();
        rsx! {
            div { key: "{idx}", class: class,
                strong { "{label}: " }
                match message.sender {
                    ChatSender::User => rsx! { span { "{message.text}" } },
                    ChatSender::Ai => rsx! { span { dangerous_inner_html: render_markup(&message.text) } },
                }
            }
        }
    });

    rsx! {
        aside { id: "chat-area", class: "chat-panel",
            header { class: "chat-header",
                h3 { "Follow-up questions" }
                button {
                    id: "close-chat",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| vm.write().chat_mut().close(),
                    "Close"
                }
            }
            div { id: "chat-history", class: "chat-history", {messages} }
            if chat.is_pending() {
                p { class: "chat-pending", "Thinking..." }
            }
            if let Some(err) = chat.error() {
                p { class: "error chat-error", "{err.message()}" }
            }
            form {
                class: "chat-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    actions::send_chat(vm, send_backend.clone());
                },
                input {
                    id: "chat-input",
                    r#type: "text",
                    placeholder: "Ask about this question",
                    value: "{chat.input()}",
                    oninput: move |evt| vm.write().chat_mut().set_input(evt.value()),
                }
                button {
                    id: "send-chat",
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_send,
                    "Send"
                }
            }
        }
    }
}
