use clap::Parser;
use services::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "quiz", version, about = "Desktop client for the quiz backend")]
pub struct Args {
    /// Base URL of the quiz backend.
    #[arg(long, env = "QUIZ_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "QUIZ_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `services=debug`).
    #[arg(long, env = "QUIZ_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
