use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::model::TopicName;
use services::{ChatRequest, GatewayError, Grade, QuizBackend, SubmitAnswer};

/// In-memory backend that behaves like the quiz server for tests.
#[derive(Default)]
pub(crate) struct FakeBackend {
    topics: Mutex<Vec<TopicName>>,
    questions_served: AtomicUsize,
    question_error: Mutex<Option<String>>,
    submit_error: Mutex<Option<String>>,
    grades: Mutex<VecDeque<bool>>,
    chat_requests: Mutex<Vec<ChatRequest>>,
}

impl FakeBackend {
    pub(crate) fn with_topics(names: &[&str]) -> Self {
        let backend = Self::default();
        *backend.topics.lock().unwrap() = names
            .iter()
            .map(|name| TopicName::new(*name).unwrap())
            .collect();
        backend
    }

    pub(crate) fn grade_next(&self, correct: bool) {
        self.grades.lock().unwrap().push_back(correct);
    }

    pub(crate) fn fail_questions(&self, message: &str) {
        *self.question_error.lock().unwrap() = Some(message.to_string());
    }

    pub(crate) fn fail_submissions(&self, message: &str) {
        *self.submit_error.lock().unwrap() = Some(message.to_string());
    }

    pub(crate) fn clear_failures(&self) {
        *self.question_error.lock().unwrap() = None;
        *self.submit_error.lock().unwrap() = None;
    }

    pub(crate) fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }
}

fn backend_error(message: &str) -> GatewayError {
    GatewayError::Backend(message.to_string())
}

#[async_trait]
impl QuizBackend for FakeBackend {
    async fn list_topics(&self) -> Result<Vec<TopicName>, GatewayError> {
        Ok(self.topics.lock().unwrap().clone())
    }

    async fn add_topic(&self, topic: &TopicName) -> Result<(), GatewayError> {
        let mut topics = self.topics.lock().unwrap();
        if topics.contains(topic) {
            return Err(backend_error("Topic already exists"));
        }
        topics.push(topic.clone());
        Ok(())
    }

    async fn delete_topic(&self, topic: &TopicName) -> Result<(), GatewayError> {
        let mut topics = self.topics.lock().unwrap();
        let before = topics.len();
        topics.retain(|existing| existing != topic);
        if topics.len() == before {
            return Err(backend_error("Topic not found"));
        }
        Ok(())
    }

    async fn fetch_question(&self, topic: &TopicName) -> Result<String, GatewayError> {
        if let Some(message) = self.question_error.lock().unwrap().as_deref() {
            return Err(backend_error(message));
        }
        let served = self.questions_served.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{topic} question {served}"))
    }

    async fn submit_answer(&self, _request: &SubmitAnswer) -> Result<Grade, GatewayError> {
        if let Some(message) = self.submit_error.lock().unwrap().as_deref() {
            return Err(backend_error(message));
        }
        let correct = self.grades.lock().unwrap().pop_front().unwrap_or(false);
        Ok(Grade {
            correct,
            explanation: "Because.".to_string(),
        })
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        Ok(format!("Re: {}", request.follow_up_question))
    }

    async fn topic_explanation(&self, topic: &TopicName) -> Result<String, GatewayError> {
        Ok(format!("About {topic}"))
    }
}
