//! # admin-sidebar
//!
//! Leptos + WASM navigation sidebar for the academic admin dashboard.
//!
//! This crate contains the collapsible `Sidebar` component, the static
//! navigation table with its route-matching rules, the host layout that owns
//! the open/closed flag, and the browser glue for persisting the expanded
//! display preference.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
