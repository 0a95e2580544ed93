//! Request sequences shared by the view actions and `QuizVm`'s async helpers.
//!
//! Each sequence runs a `begin_*` step, awaits the backend, then applies the
//! result with the matching `finish_*` step. The view state is only touched
//! inside `VmAccess::with_vm`, so a `Signal` is never borrowed across an await.

use dioxus::prelude::*;
use quiz_core::model::TopicName;
use services::QuizBackend;

use crate::vm::QuizVm;

/// Short-lived mutable access to the view state.
pub trait VmAccess {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut QuizVm) -> R) -> R;
}

impl VmAccess for QuizVm {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut QuizVm) -> R) -> R {
        f(self)
    }
}

impl VmAccess for Signal<QuizVm> {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut QuizVm) -> R) -> R {
        f(&mut self.write())
    }
}

pub async fn load_topics(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    vm.with_vm(QuizVm::begin_load_topics);
    let result = backend.list_topics().await;
    vm.with_vm(|vm| vm.finish_load_topics(result));
}

pub async fn add_topic(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(topic) = vm.with_vm(QuizVm::begin_add_topic) else {
        return;
    };
    let result = backend.add_topic(&topic).await;
    if vm.with_vm(|vm| vm.finish_add_topic(result)) {
        load_topics(vm, backend).await;
    }
}

pub async fn delete_topic(vm: &mut impl VmAccess, backend: &dyn QuizBackend, topic: &TopicName) {
    let Some(topic) = vm.with_vm(|vm| vm.begin_delete_topic(topic)) else {
        return;
    };
    let result = backend.delete_topic(&topic).await;
    if vm.with_vm(|vm| vm.finish_delete_topic(result)) {
        load_topics(vm, backend).await;
    }
}

pub async fn select_topic(vm: &mut impl VmAccess, backend: &dyn QuizBackend, topic: TopicName) {
    let topic = vm.with_vm(|vm| vm.begin_select_topic(topic));
    let result = backend.fetch_question(&topic).await;
    vm.with_vm(|vm| vm.finish_question(result));
}

pub async fn next_question(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(topic) = vm.with_vm(QuizVm::begin_next_question) else {
        return;
    };
    let result = backend.fetch_question(&topic).await;
    vm.with_vm(|vm| vm.finish_question(result));
}

pub async fn submit_answer(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(request) = vm.with_vm(QuizVm::begin_submit) else {
        return;
    };
    let result = backend.submit_answer(&request).await;
    vm.with_vm(|vm| vm.finish_submit(result));
}

pub async fn explain_topic(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(topic) = vm.with_vm(QuizVm::begin_topic_explanation) else {
        return;
    };
    let result = backend.topic_explanation(&topic).await;
    vm.with_vm(|vm| vm.finish_topic_explanation(result));
}

pub async fn send_chat(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(request) = vm.with_vm(QuizVm::begin_send_chat) else {
        return;
    };
    let result = backend.chat(&request).await;
    vm.with_vm(|vm| vm.finish_chat(result));
}

pub async fn explain_like_five(vm: &mut impl VmAccess, backend: &dyn QuizBackend) {
    let Some(request) = vm.with_vm(QuizVm::begin_eli5) else {
        return;
    };
    let result = backend.chat(&request).await;
    vm.with_vm(|vm| vm.finish_chat(result));
}
