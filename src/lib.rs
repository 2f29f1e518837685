//! # hris-console
//!
//! Leptos + WASM administration console for the HRIS platform: employee
//! directory management, attendance history, and live profile-change
//! notifications, all behind an authenticated session.
//!
//! The console is a pure presentation-and-state layer over the HRIS REST
//! API and its realtime feed. It owns no durable data beyond a handful of
//! localStorage conveniences (session snapshot, refresh credential,
//! attendance cache).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the client over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
