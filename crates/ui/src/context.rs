use std::sync::Arc;

use services::QuizBackend;

pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<dyn QuizBackend>;
    fn backend_url(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<dyn QuizBackend>,
    backend_url: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            backend_url: app.backend_url(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn QuizBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
