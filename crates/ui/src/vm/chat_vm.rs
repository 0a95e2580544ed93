use quiz_core::model::{ChatLog, ChatMessage};
use services::GatewayError;

use crate::views::ViewError;

/// Chat panel state: visibility, transcript, draft text and the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatVm {
    open: bool,
    log: ChatLog,
    input: String,
    pending: bool,
    error: Option<ViewError>,
}

impl ChatVm {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// Take the trimmed draft as the next follow-up, or `None` if it is blank
    /// or a reply is still pending.
    pub(crate) fn take_follow_up(&mut self) -> Option<String> {
        if self.pending {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.input.clear();
        Some(text)
    }

    pub(crate) fn start_exchange(&mut self, shown: impl Into<String>) {
        self.log.push(ChatMessage::user(shown));
        self.pending = true;
        self.error = None;
    }

    pub(crate) fn finish_exchange(&mut self, result: Result<String, GatewayError>) {
        self.pending = false;
        match result {
            Ok(reply) => self.log.push(ChatMessage::ai(reply)),
            Err(err) => self.error = Some(err.into()),
        }
    }
}
