//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (header, banners, loading screen) and the
//! route guard, reading shared state from Leptos context providers.

pub mod connection_banner;
pub mod loading_screen;
pub mod nav_bar;
pub mod route_guard;
