//! # blogfront
//!
//! Leptos + WASM front end for the blog platform: signup, login, browsing
//! posts, and owner-only create/edit/delete against the REST API.
//!
//! ARCHITECTURE
//! ============
//! `session` owns the authentication lifecycle (token storage, expiry,
//! route guarding). `net` wraps the REST collaborator. `state` holds
//! page-scoped models, `pages` and `components` render them.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: installs console logging and hydrates the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
