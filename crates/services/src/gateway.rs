use async_trait::async_trait;
use quiz_core::model::TopicName;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitAnswer {
    pub topic: TopicName,
    pub question: String,
    pub answer: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub topic: TopicName,
    pub question: String,
    pub answer: String,
    pub follow_up_question: String,
}

/// Grading verdict returned by `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Grade {
    pub correct: bool,
    #[serde(default)]
    pub explanation: String,
}

/// The quiz backend as seen by the client.
///
/// Every call is one stateless request/response pair. Implementations do not
/// retry, cache or batch.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<TopicName>, GatewayError>;
    async fn add_topic(&self, topic: &TopicName) -> Result<(), GatewayError>;
    async fn delete_topic(&self, topic: &TopicName) -> Result<(), GatewayError>;
    async fn fetch_question(&self, topic: &TopicName) -> Result<String, GatewayError>;
    async fn submit_answer(&self, request: &SubmitAnswer) -> Result<Grade, GatewayError>;
    async fn chat(&self, request: &ChatRequest) -> Result<String, GatewayError>;
    async fn topic_explanation(&self, topic: &TopicName) -> Result<String, GatewayError>;
}
