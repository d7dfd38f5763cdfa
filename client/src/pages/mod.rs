//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Access control lives in `components::route_guard`, never in
//! the pages themselves.

pub(crate) mod auth_form;
pub mod contests;
pub mod home;
pub mod ide;
pub mod login;
pub mod not_found;
pub mod problems;
pub mod register;
pub mod submissions;
