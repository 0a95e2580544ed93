mod cli;
mod logging;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{BackendConfig, HttpQuizBackend, QuizBackend};
use ui::{App, UiApp, build_app_context};

use crate::cli::Args;

struct DesktopApp {
    backend: Arc<HttpQuizBackend>,
    backend_url: String,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<dyn QuizBackend> {
        self.backend.clone()
    }

    fn backend_url(&self) -> String {
        self.backend_url.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    logging::init(args.log_format, &args.log_level)?;

    let config = BackendConfig::new(&args.backend_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let backend_url = config.base_url().to_string();
    tracing::info!(backend = %backend_url, timeout_secs = args.timeout_secs, "launching quiz client");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        backend: Arc::new(HttpQuizBackend::new(config)?),
        backend_url,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
