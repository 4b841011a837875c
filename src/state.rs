//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for the upstream goals
//! API.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Shared application state. Clone is required by Axum; inner fields are
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client honouring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }

    /// Absolute upstream URL for `path` (which must start with `/`).
    pub fn upstream_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }
}
