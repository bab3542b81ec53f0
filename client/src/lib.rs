//! # octofit-client
//!
//! Leptos + WASM dashboard for the OctoFit fitness tracker.
//!
//! Pages fetch collections from the OctoFit REST backend and render them as
//! tables or card grids. The Users page also edits records through a modal.
//! Shared fetch/normalize/render plumbing lives in `state::collection`,
//! `net::api` and `components::collection_frame`; pages only supply their
//! row or card templates.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
