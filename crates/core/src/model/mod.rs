mod chat;
mod session;
mod topic;

pub use chat::{ChatLog, ChatMessage, ChatSender};
pub use session::{QuizSession, Score, SessionError};
pub use topic::{TopicError, TopicName};
