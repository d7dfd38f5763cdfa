//! Host configuration parsed from environment variables.
//!
//! Optional (defaults in parentheses):
//! - `PORT` (3000)
//! - `JUDGE_API_URL` (`http://127.0.0.1:8000`)
//! - `UPSTREAM_TIMEOUT_SECS` (30)
//! - `UPSTREAM_CONNECT_TIMEOUT_SECS` (10)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_JUDGE_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },

    /// The judge API base is not an absolute http(s) URL.
    #[error("JUDGE_API_URL={0:?} must be an absolute http:// or https:// URL")]
    UpstreamUrl(String),

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The upstream HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Judge API base URL without a trailing slash.
    pub judge_api_url: String,
    pub upstream_timeout: Duration,
    pub upstream_connect_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT, "port number")?;
        let judge_api_url = normalize_base_url(var("JUDGE_API_URL").as_deref().unwrap_or(DEFAULT_JUDGE_API_URL))?;
        let timeout_secs =
            parse_secs("UPSTREAM_TIMEOUT_SECS", var("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        let connect_secs = parse_secs(
            "UPSTREAM_CONNECT_TIMEOUT_SECS",
            var("UPSTREAM_CONNECT_TIMEOUT_SECS"),
            DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port,
            judge_api_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            upstream_connect_timeout: Duration::from_secs(connect_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value, expected }),
    }
}

/// Seconds must be a positive integer; a zero timeout would fail every call.
fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let secs = parse_or(var, raw, default, "positive number of seconds")?;
    if secs == 0 {
        return Err(ConfigError::Invalid { var, value: "0".into(), expected: "positive number of seconds" });
    }
    Ok(secs)
}

/// Validate an upstream base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::UpstreamUrl(raw.to_owned()))?;
    if host.is_empty() || host.starts_with('/') || host.contains(['?', '#', ' ']) {
        return Err(ConfigError::UpstreamUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
