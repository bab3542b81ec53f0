//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos dashboard with SSR, its WASM/CSS bundle under `/pkg`,
//! static files from the site root, and a health probe. The REST backend is a
//! separate service; the dashboard calls it directly from the browser using
//! the `ApiConfig` injected here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use octofit_client::app::{App, shell};
use octofit_client::config::ApiConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health probe, SSR pages, `/pkg` assets and the
/// site root as a static fallback.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be loaded
/// (the `LEPTOS_*` environment set by `cargo leptos` or the workspace
/// `[[workspace.metadata.leptos]]` section).
pub fn app(api: ApiConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let context_api = api.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(context_api.clone()),
            {
                let opts = leptos_options.clone();
                move || shell(opts.clone(), api.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
