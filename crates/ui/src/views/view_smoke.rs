use std::sync::Arc;

use quiz_core::model::TopicName;

use super::test_harness::{ViewHarness, ViewKind};
use crate::test_support::FakeBackend;
use crate::vm::QuizVm;

fn topic(name: &str) -> TopicName {
    TopicName::new(name).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn topic_selection_lists_topics() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions", "recursion"]));
    let mut vm = QuizVm::new();
    vm.load_topics(&*backend).await;

    let harness = ViewHarness::new(ViewKind::Topics, vm, backend);
    let html = harness.render();
    assert!(html.contains("topics-list"), "missing list in {html}");
    assert!(html.contains("functions"), "missing topic in {html}");
    assert!(html.contains("recursion"), "missing topic in {html}");
    assert!(html.contains("Add topic"), "missing add form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_selection_shows_load_error() {
    let backend = Arc::new(FakeBackend::with_topics(&[]));
    let mut vm = QuizVm::new();
    vm.begin_load_topics();
    vm.finish_load_topics(Err(services::GatewayError::Backend(
        "backend offline".to_string(),
    )));

    let harness = ViewHarness::new(ViewKind::Topics, vm, backend);
    let html = harness.render();
    assert!(html.contains("backend offline"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_shows_exactly_one_main_view() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions"]));

    let harness = ViewHarness::new(ViewKind::Page, QuizVm::new(), Arc::clone(&backend));
    let html = harness.render();
    assert!(html.contains("id=\"topic-selection\""), "missing topics in {html}");
    assert!(!html.contains("id=\"quiz-area\""), "unexpected quiz in {html}");

    let mut vm = QuizVm::new();
    vm.select_topic(&*backend, topic("functions")).await;
    let harness = ViewHarness::new(ViewKind::Page, vm, backend);
    let html = harness.render();
    assert!(html.contains("id=\"quiz-area\""), "missing quiz in {html}");
    assert!(!html.contains("id=\"topic-selection\""), "unexpected topics in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_loads_topics_on_mount() {
    let backend = Arc::new(FakeBackend::with_topics(&["generators"]));
    let mut harness = ViewHarness::new(ViewKind::Page, QuizVm::new(), backend);

    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("generators"), "topics not loaded in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_area_renders_formatted_question_and_score() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions"]));
    let mut vm = QuizVm::new();
    vm.begin_select_topic(topic("functions"));
    vm.finish_question(Ok("Use **bold** and `x*y`".to_string()));

    let harness = ViewHarness::new(ViewKind::Quiz, vm, backend);
    let html = harness.render();
    assert!(html.contains("Topic: functions"), "missing topic in {html}");
    assert!(html.contains("<strong>bold</strong>"), "missing bold in {html}");
    assert!(html.contains("<code>x*y</code>"), "missing code in {html}");
    assert!(!html.contains("result-container"), "unexpected result in {html}");
    assert!(!html.contains("Next question"), "unexpected next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_area_shows_result_after_grading() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions"]));
    backend.grade_next(true);
    let mut vm = QuizVm::new();
    vm.select_topic(&*backend, topic("functions")).await;
    vm.set_answer("4");
    vm.submit_answer(&*backend).await;

    let harness = ViewHarness::new(ViewKind::Quiz, vm, backend);
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("Because."), "missing explanation in {html}");
    assert!(html.contains("Next question"), "missing next in {html}");
    assert!(
        html.contains("<span id=\"correct-count\">1</span>"),
        "missing score in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_area_shows_question_error() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions"]));
    backend.fail_questions("Failed to reach the model");
    let mut vm = QuizVm::new();
    vm.select_topic(&*backend, topic("functions")).await;

    let harness = ViewHarness::new(ViewKind::Quiz, vm, backend);
    let html = harness.render();
    assert!(html.contains("Failed to reach the model"), "missing error in {html}");
    assert!(html.contains("id=\"retry-question\""), "missing retry in {html}");
    assert!(html.contains("Try again"), "missing retry label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_area_marks_pending_submission() {
    let backend = Arc::new(FakeBackend::with_topics(&["functions"]));
    let mut vm = QuizVm::new();
    vm.begin_select_topic(topic("functions"));
    vm.finish_question(Ok("What is 2 * 3?".to_string()));
    vm.set_answer("6");
    assert!(vm.begin_submit().is_some());

    let harness = ViewHarness::new(ViewKind::Quiz, vm, backend);
    let html = harness.render();
    assert!(html.contains("class=\"quiz-area loading\""), "missing pending cue in {html}");
    assert!(html.contains("Checking..."), "missing pending label in {html}");
    assert!(html.contains("What is 2 * 3?"), "arithmetic mangled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_panel_renders_transcript() {
    let backend = Arc::new(FakeBackend::with_topics(&["recursion"]));
    let mut vm = QuizVm::new();
    vm.select_topic(&*backend, topic("recursion")).await;
    vm.chat_mut().open();
    vm.chat_mut().set_input("what is a base case?");
    vm.send_chat(&*backend).await;

    let harness = ViewHarness::new(ViewKind::Chat, vm, backend);
    let html = harness.render();
    assert!(html.contains("You: "), "missing user label in {html}");
    assert!(html.contains("what is a base case?"), "missing user text in {html}");
    assert!(html.contains("AI: "), "missing ai label in {html}");
    assert!(html.contains("Re: what is a base case?"), "missing reply in {html}");
}
