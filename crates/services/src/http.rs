use async_trait::async_trait;
use quiz_core::model::TopicName;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::GatewayError;
use crate::gateway::{ChatRequest, Grade, QuizBackend, SubmitAnswer};

/// `QuizBackend` over the backend's JSON HTTP API.
#[derive(Clone)]
pub struct HttpQuizBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpQuizBackend {
    /// # Errors
    ///
    /// Returns `GatewayError::Http` if the HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        tracing::debug!(endpoint, "sending backend request");
        let result = read_response(request).await;
        if let Err(err) = &result {
            tracing::warn!(endpoint, error = %err, "backend request failed");
        }
        result
    }
}

async fn read_response<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GatewayError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    // A backend-reported message wins over the bare status code.
    if let Some(message) = backend_error(&body) {
        return Err(GatewayError::Backend(message));
    }
    if !status.is_success() {
        return Err(GatewayError::HttpStatus(status));
    }

    Ok(serde_json::from_slice(&body)?)
}

fn backend_error(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

#[async_trait]
impl QuizBackend for HttpQuizBackend {
    async fn list_topics(&self) -> Result<Vec<TopicName>, GatewayError> {
        let url = self.config.endpoint(&["api", "topics"])?;
        let raw: Vec<String> = self.send("list_topics", self.client.get(url)).await?;
        let topics = raw
            .into_iter()
            .filter_map(|name| match TopicName::new(name) {
                Ok(topic) => Some(topic),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping topic from backend");
                    None
                }
            })
            .collect();
        Ok(topics)
    }

    async fn add_topic(&self, topic: &TopicName) -> Result<(), GatewayError> {
        let url = self.config.endpoint(&["api", "topics"])?;
        let body = TopicBody { topic };
        let _: IgnoredAny = self
            .send("add_topic", self.client.post(url).json(&body))
            .await?;
        Ok(())
    }

    async fn delete_topic(&self, topic: &TopicName) -> Result<(), GatewayError> {
        let url = self
            .config
            .endpoint(&["api", "topics", topic.as_str()])?;
        let _: IgnoredAny = self.send("delete_topic", self.client.delete(url)).await?;
        Ok(())
    }

    async fn fetch_question(&self, topic: &TopicName) -> Result<String, GatewayError> {
        let url = self.config.endpoint(&["api", "question"])?;
        let body = TopicBody { topic };
        let response: QuestionResponse = self
            .send("fetch_question", self.client.post(url).json(&body))
            .await?;
        Ok(response.question)
    }

    async fn submit_answer(&self, request: &SubmitAnswer) -> Result<Grade, GatewayError> {
        let url = self.config.endpoint(&["api", "submit"])?;
        self.send("submit_answer", self.client.post(url).json(request))
            .await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        let url = self.config.endpoint(&["api", "chat"])?;
        let response: ChatResponse = self
            .send("chat", self.client.post(url).json(request))
            .await?;
        Ok(response.response)
    }

    async fn topic_explanation(&self, topic: &TopicName) -> Result<String, GatewayError> {
        let url = self.config.endpoint(&["api", "topic-explanation"])?;
        let body = TopicBody { topic };
        let response: ExplanationResponse = self
            .send("topic_explanation", self.client.post(url).json(&body))
            .await?;
        Ok(response.explanation)
    }
}

#[derive(Debug, Serialize)]
struct TopicBody<'a> {
    topic: &'a TopicName,
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    question: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct ExplanationResponse {
    explanation: String,
}
