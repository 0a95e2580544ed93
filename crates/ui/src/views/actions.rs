//! Event handlers that drive `QuizVm` against the backend.
//!
//! Each handler spawns the matching `workflow` sequence on the page's signal.

use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::TopicName;
use services::QuizBackend;

use crate::vm::{QuizVm, workflow};

pub(crate) fn load_topics(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::load_topics(&mut vm, &*backend).await });
}

pub(crate) fn add_topic(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::add_topic(&mut vm, &*backend).await });
}

pub(crate) fn delete_topic(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>, topic: TopicName) {
    spawn(async move { workflow::delete_topic(&mut vm, &*backend, &topic).await });
}

pub(crate) fn select_topic(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>, topic: TopicName) {
    spawn(async move { workflow::select_topic(&mut vm, &*backend, topic).await });
}

pub(crate) fn next_question(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::next_question(&mut vm, &*backend).await });
}

pub(crate) fn submit_answer(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::submit_answer(&mut vm, &*backend).await });
}

pub(crate) fn explain_topic(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::explain_topic(&mut vm, &*backend).await });
}

pub(crate) fn send_chat(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::send_chat(&mut vm, &*backend).await });
}

pub(crate) fn explain_like_five(mut vm: Signal<QuizVm>, backend: Arc<dyn QuizBackend>) {
    spawn(async move { workflow::explain_like_five(&mut vm, &*backend).await });
}
