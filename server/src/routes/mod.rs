//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. The portfolio page is server-rendered at `/`
//! and hydrated from the bundle served under `/pkg`.

pub mod contact;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Resolve the directory static assets (bundle, images) are served from.
fn site_dir(site_root: &str) -> PathBuf {
    std::env::var("SITE_DIR").map_or_else(|_| PathBuf::from(site_root), PathBuf::from)
}

/// Full application: API routes + Leptos SSR at `/` + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// cargo-leptos environment or malformed `[workspace.metadata.leptos]`).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = site_dir(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
