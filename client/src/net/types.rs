//! Wire DTOs for the remote judge API and the persisted session record.
//!
//! DESIGN
//! ======
//! Field names follow the judge API's JSON exactly (`access`/`refresh` on the
//! token response, camelCase on the stored session record) so serde
//! round-trips stay lossless across reloads and server versions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user record kept by the session store.
///
/// Stored in durable storage as
/// `{"username":"…","accessToken":"…","refreshToken":"…"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionUser {
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionUser {
    /// Build the session record from a successful login response.
    #[must_use]
    pub fn from_tokens(username: &str, tokens: TokenPair) -> Self {
        Self {
            username: username.to_owned(),
            access_token: tokens.access,
            refresh_token: tokens.refresh,
        }
    }

    /// Uppercased first character of the username, used for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// `POST /api/auth/login/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/register/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// JWT pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Error body the judge API attaches to rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The most specific message present, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        let present = |m: &String| !m.trim().is_empty();
        self.error.filter(present).or_else(|| self.message.filter(present))
    }
}

/// `POST /judge/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub code: String,
    pub language: String,
}

/// `POST /judge/` response body: either program output or an error message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What a code run produced, as shown in the IDE console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Program finished; output may be empty.
    Output(String),
    /// The judge reported an error (compile error, runtime error, ...).
    Failed(String),
}

impl From<RunResponse> for RunOutcome {
    fn from(resp: RunResponse) -> Self {
        match resp.message.filter(|m| !m.is_empty()) {
            Some(message) => Self::Failed(message),
            None => Self::Output(resp.output.unwrap_or_default()),
        }
    }
}
