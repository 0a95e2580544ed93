use std::time::Duration;

use url::Url;

use crate::error::GatewayError;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
    timeout: Duration,
}

impl BackendConfig {
    /// Parse and validate the backend base URL.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` if the URL does not parse and
    /// `GatewayError::NotABase` if it cannot carry a path (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url.trim())?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::NotABase(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the URL for `segments` below the base path.
    ///
    /// Each segment is percent-encoded on its own, so a topic such as
    /// `map/filter/reduce` stays a single path segment.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::NotABase` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::NotABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
