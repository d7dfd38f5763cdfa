//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! language) and pure routing policy from page and component logic.

pub mod clock;
pub mod i18n;
pub mod route_gate;
pub mod storage;
