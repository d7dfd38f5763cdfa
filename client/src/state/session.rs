//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `SessionStore` inside an `RwSignal` and provides it
//! via context. Route guards and user-aware components read the `Session`
//! snapshot; only login/logout handlers mutate it. No other module touches
//! the `"user"` storage key.
//!
//! LIFECYCLE
//! =========
//! Constructed loading and anonymous. `initialize` hydrates from storage once
//! and clears `loading` for good. `login` replaces the user wholesale and
//! `logout` clears it; both bump `epoch` when they change anything.
//!
//! TRADE-OFFS
//! ==========
//! A corrupted stored record, or a failed storage write, is logged and
//! otherwise ignored. The UI stays usable with an anonymous (or in-memory
//! only) session instead of blocking on local storage problems.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;
use crate::util::storage::DurableStorage;

/// Durable storage key holding the serialized [`SessionUser`].
pub const SESSION_STORAGE_KEY: &str = "user";

/// Observable session snapshot consumed by the route gate and views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Session {
    /// The pre-hydration snapshot: anonymous and still loading.
    #[must_use]
    pub const fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// A settled snapshot for `user`.
    #[must_use]
    pub const fn settled(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Sole owner of the persisted session record.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    epoch: u64,
}

impl<S: DurableStorage> SessionStore<S> {
    /// Create a store that has not yet read `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::loading(), epoch: 0 }
    }

    /// Hydrate from durable storage. Only the first call reads; later calls
    /// are no-ops so `loading` can never flip back.
    pub fn initialize(&mut self) {
        if !self.session.loading {
            return;
        }
        self.session.user = self.read_stored_user();
        self.session.loading = false;
    }

    /// Persist `user` and make it current. Re-submitting the current user is
    /// a no-op.
    pub fn login(&mut self, user: SessionUser) {
        if self.session.user.as_ref() == Some(&user) {
            return;
        }
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_STORAGE_KEY, &raw) {
                    leptos::logging::warn!("session persist failed: {e}");
                }
            }
            Err(e) => leptos::logging::warn!("session encode failed: {e}"),
        }
        self.session.user = Some(user);
        self.epoch += 1;
    }

    /// Commit a login that started when the store was at `epoch`.
    ///
    /// Returns `false` and leaves the store untouched when any login or
    /// logout happened after `epoch` was read, so a slow authentication
    /// response can never overwrite a more recent explicit logout.
    pub fn login_if_current(&mut self, epoch: u64, user: SessionUser) -> bool {
        if epoch != self.epoch {
            leptos::logging::log!("discarding stale login for {} (epoch {epoch} != {})", user.username, self.epoch);
            return false;
        }
        self.login(user);
        true
    }

    /// Remove the persisted record and drop the current user.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.delete(SESSION_STORAGE_KEY) {
            leptos::logging::warn!("session delete failed: {e}");
        }
        if self.session.user.take().is_some() {
            self.epoch += 1;
        }
    }

    /// Current observable state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Owned copy of the current state, for reactive consumers.
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    /// Monotonic counter of state-changing logins and logouts.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn read_stored_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(SESSION_STORAGE_KEY)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("ignoring malformed stored session: {e}");
                None
            }
        }
    }
}
