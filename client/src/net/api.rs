//! REST calls to the judge API (proxied through the host under the same origin).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Unavailable`/offline since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Authentication and run failures come back as typed errors. Pages turn them
//! into translated messages; nothing here panics or touches session state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, LoginRequest, RegisterRequest, RunRequest, RunResponse, TokenPair};
use super::types::{RunOutcome, SessionUser};
use crate::util::i18n::Translations;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login/";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register/";
pub const RUN_ENDPOINT: &str = "/judge/";
pub const PING_ENDPOINT: &str = "/tests/test_conntect/";

/// Why an authentication call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("bad request: {}", .0.as_deref().unwrap_or("no detail"))]
    BadRequest(Option<String>),
    #[error("server error: {0}")]
    Server(u16),
    #[error("request rejected with status {0}")]
    Rejected(u16),
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// Translated text for the login/register error banner.
    #[must_use]
    pub fn user_message(&self, t: &Translations) -> String {
        match self {
            Self::InvalidCredentials => t.errors.invalid_credentials.to_owned(),
            Self::BadRequest(Some(detail)) => detail.clone(),
            Self::BadRequest(None) => t.errors.bad_request.to_owned(),
            Self::Server(_) => t.errors.server.to_owned(),
            Self::Unreachable(_) => t.errors.unreachable.to_owned(),
            Self::Rejected(_) | Self::Malformed(_) | Self::Unavailable => t.errors.unexpected.to_owned(),
        }
    }
}

/// Why a code run produced no judge verdict.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("server error: {status} - {}", .message.as_deref().unwrap_or("unknown error"))]
    Server { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Unreachable(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a non-success HTTP status to an [`AuthError`].
///
/// The host answers 502/504 when it cannot reach the judge API, which the
/// user should see as a network problem rather than a server fault.
#[must_use]
pub fn classify_auth_status(status: u16, detail: Option<String>) -> AuthError {
    match status {
        401 => AuthError::InvalidCredentials,
        400 => AuthError::BadRequest(detail),
        502 | 504 => AuthError::Unreachable(format!("gateway status {status}")),
        s if s >= 500 => AuthError::Server(s),
        s => AuthError::Rejected(s),
    }
}

/// Map a non-success HTTP status to a [`RunError`].
#[must_use]
pub fn classify_run_status(status: u16, message: Option<String>) -> RunError {
    match status {
        502 | 504 => RunError::Unreachable(format!("gateway status {status}")),
        status => RunError::Server { status, message },
    }
}

#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<ApiErrorBody>().await.ok().and_then(ApiErrorBody::into_message)
}

/// Exchange credentials for a session record via `POST /api/auth/login/`.
///
/// # Errors
///
/// Returns an [`AuthError`] describing the rejection or transport failure.
pub async fn login(username: &str, password: &str) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(classify_auth_status(status, error_detail(resp).await));
        }
        let tokens: TokenPair = resp.json().await.map_err(|e| AuthError::Malformed(e.to_string()))?;
        Ok(SessionUser::from_tokens(username, tokens))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register/`.
///
/// # Errors
///
/// Returns an [`AuthError`]; a 400 carries the server's explanation when given.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(classify_auth_status(status, error_detail(resp).await));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(AuthError::Unavailable)
    }
}

/// Submit `code` to the judge's run endpoint, `POST /judge/`.
///
/// # Errors
///
/// Returns a [`RunError`] when no verdict could be obtained. A judge-reported
/// failure (compile error etc.) is `Ok(RunOutcome::Failed(_))`.
pub async fn run_code(code: &str, language: &str) -> Result<RunOutcome, RunError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RunRequest { code: code.to_owned(), language: language.to_owned() };
        let resp = gloo_net::http::Request::post(RUN_ENDPOINT)
            .json(&payload)
            .map_err(|e| RunError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| RunError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(classify_run_status(status, error_detail(resp).await));
        }
        let body: RunResponse = resp.json().await.map_err(|e| RunError::Malformed(e.to_string()))?;
        Ok(RunOutcome::from(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (code, language);
        Err(RunError::Unavailable)
    }
}

/// Probe the judge API. `true` only on a 2xx answer.
pub async fn check_connection() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Ok(req) = gloo_net::http::Request::post(PING_ENDPOINT).json(&serde_json::json!({ "message": "ok" })) else {
            return false;
        };
        match req.send().await {
            Ok(resp) => resp.ok(),
            Err(e) => {
                leptos::logging::warn!("connection check failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
