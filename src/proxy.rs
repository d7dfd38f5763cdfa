//! Same-origin forwarding of judge API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Each proxied route forwards the
//! request body and path (including query) to `JUDGE_API_URL` and relays the
//! upstream status, content type and body unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures become host errors: a timeout is 504, anything
//! else that prevents an upstream answer is 502. Both carry a JSON
//! `{"message": ...}` body, the same shape the judge API uses.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed upstream. Everything else (cookies, host) stays here.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [CONTENT_TYPE, ACCEPT, AUTHORIZATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("judge API timed out")]
    Timeout,
    #[error("judge API unreachable: {0}")]
    Unreachable(String),
}

impl ProxyError {
    fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Join the upstream base with the incoming path and query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", axum::http::uri::PathAndQuery::as_str);
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// `POST` handler shared by every proxied judge route.
pub async fn forward(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    let mut request = state.http.post(&url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await.map_err(|e| {
        let err = ProxyError::from_reqwest(&e);
        tracing::warn!(%url, error = %e, "judge request failed");
        err
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "judge response body failed");
        ProxyError::from_reqwest(&e)
    })?;

    tracing::debug!(%url, status = status.as_u16(), bytes = bytes.len(), "judge call relayed");

    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    Ok(response)
}
