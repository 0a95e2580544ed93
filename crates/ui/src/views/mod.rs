mod actions;
mod chat;
mod page;
mod quiz;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatPanel;
pub use page::QuizPage;
pub use quiz::QuizArea;
pub use state::{ViewError, ViewState};
pub use topics::TopicSelection;
