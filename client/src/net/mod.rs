//! Networking modules for the judge HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and classifies failures; `types` defines
//! the wire schema and the persisted session record.

pub mod api;
pub mod types;
