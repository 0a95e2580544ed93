use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizBackend;

use crate::context::{UiApp, build_app_context};
use crate::test_support::FakeBackend;
use crate::views::{ChatPanel, QuizArea, QuizPage, TopicSelection};
use crate::vm::QuizVm;

struct TestApp {
    backend: Arc<FakeBackend>,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<dyn QuizBackend> {
        self.backend.clone()
    }

    fn backend_url(&self) -> String {
        "http://quiz.test".to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Page,
    Topics,
    Quiz,
    Chat,
}

#[derive(Props, Clone)]
struct HarnessProps {
    backend: Arc<FakeBackend>,
    vm: QuizVm,
    view: ViewKind,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        backend: Arc::clone(&props.backend),
    });
    use_context_provider(|| build_app_context(&app));
    let initial = props.vm.clone();
    use_context_provider(|| Signal::new(initial));

    match props.view {
        ViewKind::Page => rsx! { QuizPage {} },
        ViewKind::Topics => rsx! { TopicSelection {} },
        ViewKind::Quiz => rsx! { QuizArea {} },
        ViewKind::Chat => rsx! { ChatPanel {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn new(view: ViewKind, vm: QuizVm, backend: Arc<FakeBackend>) -> Self {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { backend, vm, view });
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom }
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
