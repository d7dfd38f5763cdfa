//! Shared application state handed to every proxy handler.

use std::sync::Arc;

use crate::config::{ConfigError, HostConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Judge API base URL without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the upstream HTTP client from host config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &HostConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_connect_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self::with_client(http, &config.judge_api_url))
    }

    pub fn with_client(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream) }
    }
}
