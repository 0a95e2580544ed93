use quiz_core::model::{QuizSession, Score, TopicName};
use services::{ChatRequest, GatewayError, Grade, QuizBackend, SubmitAnswer};

use crate::views::{ViewError, ViewState};
use crate::vm::{ChatVm, workflow};

/// Shown in the transcript when the learner asks for an ELI5.
pub const ELI5_LABEL: &str = "Explain this like I'm five.";
const ELI5_FOLLOW_UP: &str = "Explain this question like I'm five years old. \
Use a simple everyday analogy and avoid jargon. Do not give away the answer.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    TopicSelection,
    Quiz,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub explanation: String,
}

impl AnswerResult {
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Incorrect!" }
    }
}

/// View state of the quiz page.
///
/// Each backend interaction is split into `begin_*`, which flips the view flags
/// and returns the request to send (or `None` when the action is not allowed
/// right now), and `finish_*`, which applies the response. The `async` methods
/// run both halves against a backend in one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    screen: Screen,
    topics: ViewState<Vec<TopicName>>,
    new_topic: String,
    topic_busy: bool,
    topic_error: Option<ViewError>,
    session: Option<QuizSession>,
    question: ViewState<String>,
    answer: String,
    submit_enabled: bool,
    submitting: bool,
    submit_error: Option<ViewError>,
    result: Option<AnswerResult>,
    topic_explanation: ViewState<String>,
    chat: ChatVm,
}

impl Default for QuizVm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::TopicSelection,
            topics: ViewState::Idle,
            new_topic: String::new(),
            topic_busy: false,
            topic_error: None,
            session: None,
            question: ViewState::Idle,
            answer: String::new(),
            submit_enabled: false,
            submitting: false,
            submit_error: None,
            result: None,
            topic_explanation: ViewState::Idle,
            chat: ChatVm::default(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn topics(&self) -> &ViewState<Vec<TopicName>> {
        &self.topics
    }

    #[must_use]
    pub fn new_topic(&self) -> &str {
        &self.new_topic
    }

    pub fn set_new_topic(&mut self, value: impl Into<String>) {
        self.new_topic = value.into();
    }

    #[must_use]
    pub fn topic_busy(&self) -> bool {
        self.topic_busy
    }

    #[must_use]
    pub fn topic_error(&self) -> Option<&ViewError> {
        self.topic_error.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_topic(&self) -> Option<&TopicName> {
        self.session.as_ref().map(QuizSession::topic)
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.session
            .as_ref()
            .map(QuizSession::score)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn question(&self) -> &ViewState<String> {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn set_answer(&mut self, value: impl Into<String>) {
        self.answer = value.into();
    }

    /// Whether the answer box and submit button accept input.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn submit_error(&self) -> Option<&ViewError> {
        self.submit_error.as_ref()
    }

    /// The graded result; the result panel and explanation are visible while set.
    #[must_use]
    pub fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn topic_explanation(&self) -> &ViewState<String> {
        &self.topic_explanation
    }

    #[must_use]
    pub fn chat(&self) -> &ChatVm {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatVm {
        &mut self.chat
    }

    // Topic list

    pub fn begin_load_topics(&mut self) {
        self.topics = ViewState::Loading;
    }

    pub fn finish_load_topics(&mut self, result: Result<Vec<TopicName>, GatewayError>) {
        self.topics = result.into();
    }

    /// Validate the new-topic draft. Blank names are rejected without a request.
    pub fn begin_add_topic(&mut self) -> Option<TopicName> {
        if self.topic_busy {
            return None;
        }
        match TopicName::new(self.new_topic.clone()) {
            Ok(topic) => {
                self.topic_busy = true;
                self.topic_error = None;
                Some(topic)
            }
            Err(err) => {
                self.topic_error = Some(ViewError::new(err.to_string()));
                None
            }
        }
    }

    /// Returns `true` when the topic list should be reloaded.
    pub fn finish_add_topic(&mut self, result: Result<(), GatewayError>) -> bool {
        self.topic_busy = false;
        match result {
            Ok(()) => {
                self.new_topic.clear();
                true
            }
            Err(err) => {
                self.topic_error = Some(err.into());
                false
            }
        }
    }

    pub fn begin_delete_topic(&mut self, topic: &TopicName) -> Option<TopicName> {
        if self.topic_busy {
            return None;
        }
        self.topic_busy = true;
        self.topic_error = None;
        Some(topic.clone())
    }

    /// Returns `true` when the topic list should be reloaded.
    pub fn finish_delete_topic(&mut self, result: Result<(), GatewayError>) -> bool {
        self.topic_busy = false;
        match result {
            Ok(()) => true,
            Err(err) => {
                self.topic_error = Some(err.into());
                false
            }
        }
    }

    // Quiz flow

    /// Start a fresh session on `topic` and switch to the quiz view.
    ///
    /// Returns the topic whose first question must be fetched.
    pub fn begin_select_topic(&mut self, topic: TopicName) -> TopicName {
        tracing::info!(topic = %topic, "starting quiz");
        self.session = Some(QuizSession::new(topic.clone()));
        self.screen = Screen::Quiz;
        self.submit_enabled = false;
        self.submitting = false;
        self.topic_explanation = ViewState::Idle;
        self.reset_question_flags();
        topic
    }

    pub fn begin_next_question(&mut self) -> Option<TopicName> {
        if self.submitting || self.question.is_loading() {
            return None;
        }
        let topic = self.current_topic()?.clone();
        self.reset_question_flags();
        Some(topic)
    }

    /// Apply a question response. A failure leaves the submit control as it was.
    pub fn finish_question(&mut self, result: Result<String, GatewayError>) {
        match result {
            Ok(question) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_question(question.clone());
                }
                self.question = ViewState::Ready(question);
                self.submit_enabled = true;
            }
            Err(err) => self.question = ViewState::Error(err.into()),
        }
    }

    pub fn begin_submit(&mut self) -> Option<SubmitAnswer> {
        if !self.submit_enabled || self.submitting {
            return None;
        }
        let session = self.session.as_ref()?;
        let request = SubmitAnswer {
            topic: session.topic().clone(),
            question: session.question()?.to_string(),
            answer: self.answer.clone(),
        };
        self.submitting = true;
        self.submit_enabled = false;
        self.submit_error = None;
        Some(request)
    }

    /// Apply a grading response.
    ///
    /// On success the score moves by exactly one and only "next question"
    /// stays actionable. On failure the submit control is re-enabled.
    pub fn finish_submit(&mut self, result: Result<Grade, GatewayError>) {
        self.submitting = false;
        match result {
            Ok(grade) => {
                if let Some(session) = self.session.as_mut() {
                    if let Err(err) = session.record_answer(grade.correct) {
                        tracing::warn!(error = %err, "grade arrived without a question");
                    }
                }
                self.result = Some(AnswerResult {
                    correct: grade.correct,
                    explanation: grade.explanation,
                });
            }
            Err(err) => {
                self.submit_error = Some(err.into());
                self.submit_enabled = true;
            }
        }
    }

    /// Back to the topic list. Stored topics and the session are kept.
    pub fn change_topic(&mut self) {
        self.screen = Screen::TopicSelection;
    }

    pub fn begin_topic_explanation(&mut self) -> Option<TopicName> {
        if self.topic_explanation.is_loading() {
            return None;
        }
        let topic = self.current_topic()?.clone();
        self.topic_explanation = ViewState::Loading;
        Some(topic)
    }

    pub fn finish_topic_explanation(&mut self, result: Result<String, GatewayError>) {
        self.topic_explanation = result.into();
    }

    // Chat

    pub fn begin_send_chat(&mut self) -> Option<ChatRequest> {
        if self.chat.is_pending() {
            return None;
        }
        let topic = self.current_topic()?.clone();
        let follow_up = self.chat.take_follow_up()?;
        self.chat.start_exchange(follow_up.clone());
        Some(self.chat_request(topic, follow_up))
    }

    /// Ask for a simplified explanation of the current question.
    pub fn begin_eli5(&mut self) -> Option<ChatRequest> {
        if self.chat.is_pending() {
            return None;
        }
        let session = self.session.as_ref()?;
        if session.question().is_none() {
            return None;
        }
        let topic = session.topic().clone();
        self.chat.open();
        self.chat.start_exchange(ELI5_LABEL);
        Some(self.chat_request(topic, ELI5_FOLLOW_UP.to_string()))
    }

    pub fn finish_chat(&mut self, result: Result<String, GatewayError>) {
        self.chat.finish_exchange(result);
    }

    fn chat_request(&self, topic: TopicName, follow_up_question: String) -> ChatRequest {
        ChatRequest {
            topic,
            question: self
                .session
                .as_ref()
                .and_then(QuizSession::question)
                .unwrap_or_default()
                .to_string(),
            answer: self.answer.clone(),
            follow_up_question,
        }
    }

    fn reset_question_flags(&mut self) {
        self.question = ViewState::Loading;
        self.result = None;
        self.submit_error = None;
        self.answer.clear();
    }

    // Combined request/response helpers.

    pub async fn load_topics(&mut self, backend: &dyn QuizBackend) {
        workflow::load_topics(self, backend).await;
    }

    pub async fn add_topic(&mut self, backend: &dyn QuizBackend) {
        workflow::add_topic(self, backend).await;
    }

    pub async fn delete_topic(&mut self, backend: &dyn QuizBackend, topic: &TopicName) {
        workflow::delete_topic(self, backend, topic).await;
    }

    pub async fn select_topic(&mut self, backend: &dyn QuizBackend, topic: TopicName) {
        workflow::select_topic(self, backend, topic).await;
    }

    pub async fn next_question(&mut self, backend: &dyn QuizBackend) {
        workflow::next_question(self, backend).await;
    }

    pub async fn submit_answer(&mut self, backend: &dyn QuizBackend) {
        workflow::submit_answer(self, backend).await;
    }

    pub async fn explain_topic(&mut self, backend: &dyn QuizBackend) {
        workflow::explain_topic(self, backend).await;
    }

    pub async fn send_chat(&mut self, backend: &dyn QuizBackend) {
        workflow::send_chat(self, backend).await;
    }

    pub async fn explain_like_five(&mut self, backend: &dyn QuizBackend) {
        workflow::explain_like_five(self, backend).await;
    }
}
