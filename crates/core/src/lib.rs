#![forbid(unsafe_code)]

pub mod format;
pub mod model;

pub use format::format_text;
