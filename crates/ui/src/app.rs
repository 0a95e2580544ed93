use dioxus::prelude::*;

use crate::views::QuizPage;
use crate::vm::QuizVm;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(QuizVm::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizPage {}
            }
        }
    }
}
