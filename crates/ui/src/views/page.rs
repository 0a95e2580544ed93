use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::actions;
use crate::views::{ChatPanel, QuizArea, TopicSelection};
use crate::vm::{QuizVm, Screen};

/// The single quiz page: topic list or quiz, with the chat panel on top.
#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<QuizVm>>();

    let backend = ctx.backend();
    use_hook(move || actions::load_topics(vm, backend));

    let screen = vm.read().screen();
    let chat_open = vm.read().chat().is_open();

    rsx! {
        div { class: "page quiz-page",
            match screen {
                Screen::TopicSelection => rsx! { TopicSelection {} },
                Screen::Quiz => rsx! { QuizArea {} },
            }
            if chat_open {
                ChatPanel {}
            }
            footer { class: "page-footer", "Backend: {ctx.backend_url()}" }
        }
    }
}
