//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the judge API proxy routes, the Leptos SSR pages,
//! and the compiled WASM/CSS bundle under `/pkg`. Unknown paths fall through
//! to Leptos, which renders its not-found view.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use client::net::api::{LOGIN_ENDPOINT, PING_ENDPOINT, REGISTER_ENDPOINT, RUN_ENDPOINT};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::proxy;
use crate::state::AppState;

/// Judge API proxy routes plus the health probe.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(LOGIN_ENDPOINT, post(proxy::forward))
        .route(REGISTER_ENDPOINT, post(proxy::forward))
        .route(RUN_ENDPOINT, post(proxy::forward))
        .route(PING_ENDPOINT, post(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: proxy routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos site configuration cannot be
/// loaded.
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
