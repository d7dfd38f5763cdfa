//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `connectivity`, `ui`) so components
//! depend on small focused models. Each lives in its own `RwSignal` context
//! provided by the app root.

pub mod connectivity;
pub mod session;
pub mod ui;

use leptos::prelude::RwSignal;

use crate::util::storage::BrowserStorage;

/// Context handle for the one session store of the running app.
pub type SessionSignal = RwSignal<session::SessionStore<BrowserStorage>>;
