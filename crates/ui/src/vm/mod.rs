mod chat_vm;
mod markup;
mod quiz_vm;
pub(crate) mod workflow;

pub use chat_vm::ChatVm;
pub use markup::{render_markup, sanitize_html};
pub use quiz_vm::{AnswerResult, ELI5_LABEL, QuizVm, Screen};
