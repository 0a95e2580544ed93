#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::{BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT};
pub use error::GatewayError;
pub use gateway::{ChatRequest, Grade, QuizBackend, SubmitAnswer};
pub use http::HttpQuizBackend;
