//! Route gating: map a session snapshot and a requested path to a view decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_guard` evaluates [`decide`] on every session or location
//! change and performs the navigation it asks for. Keeping the decision pure
//! lets every route apply identical login/home redirect rules.
//!
//! ORDER
//! =====
//! 1. Session still loading: show the loading screen, for any path.
//! 2. Path matches no declared route: not found.
//! 3. Protected route without a user: redirect to `/login`.
//! 4. Auth route with a user: redirect to `/`.
//! 5. Otherwise render.
//!
//! [`guard_decision`] adds one step in front: while the first connectivity
//! check is in flight every path shows the loading screen. The route table
//! itself never depends on connectivity, so the server registers every route.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use crate::state::connectivity::Connectivity;
use crate::state::session::Session;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROBLEMS_PATH: &str = "/problems";
pub const CONTESTS_PATH: &str = "/contests";
pub const SUBMISSIONS_PATH: &str = "/submissions";
pub const IDE_PATH: &str = "/ide";

/// Access class of a declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Visible to everyone.
    Public,
    /// Requires a signed-in user.
    Protected,
    /// Login/register screens; pointless once signed in.
    Auth,
}

/// Every route the app declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Problems,
    Contests,
    Submissions,
    Ide,
}

impl Route {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Problems,
        Self::Contests,
        Self::Submissions,
        Self::Ide,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::Problems => PROBLEMS_PATH,
            Self::Contests => CONTESTS_PATH,
            Self::Submissions => SUBMISSIONS_PATH,
            Self::Ide => IDE_PATH,
        }
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Home => Access::Public,
            Self::Login | Self::Register => Access::Auth,
            Self::Problems | Self::Contests | Self::Submissions | Self::Ide => Access::Protected,
        }
    }

    /// Resolve a browser path (query, fragment and one trailing slash ignored).
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Outcome of gating one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not hydrated yet; render neither content nor redirect.
    ShowLoading,
    /// Navigate to the given path instead.
    Redirect(&'static str),
    /// Render the requested (normalized) path.
    Render(String),
    /// No declared route matches.
    NotFound,
}

/// Decide what to show for `requested_path` under `session`.
#[must_use]
pub fn decide(session: &Session, requested_path: &str) -> GateDecision {
    if session.loading {
        return GateDecision::ShowLoading;
    }
    let Some(route) = Route::from_path(requested_path) else {
        return GateDecision::NotFound;
    };
    match (route.access(), session.user.is_some()) {
        (Access::Protected, false) => GateDecision::Redirect(LOGIN_PATH),
        (Access::Auth, true) => GateDecision::Redirect(HOME_PATH),
        (Access::Public | Access::Protected | Access::Auth, _) => GateDecision::Render(route.path().to_owned()),
    }
}

/// [`decide`], held at the loading screen until the first connectivity check
/// has finished.
#[must_use]
pub fn guard_decision(connectivity: Connectivity, session: &Session, requested_path: &str) -> GateDecision {
    if connectivity.is_checking() {
        return GateDecision::ShowLoading;
    }
    decide(session, requested_path)
}

/// Strip query/fragment and a single trailing slash; empty becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() || path == HOME_PATH {
        return HOME_PATH;
    }
    path.strip_suffix('/').unwrap_or(path)
}
