//! # unitrack
//!
//! Leptos + WASM frontend for the UniTrack university attendance portal.
//! Three role surfaces (admin, officer, student) share one session model:
//! route guards decide per navigation whether to render, redirect to login,
//! or bounce to the role's home dashboard, and the admin surface hosts the
//! multi-step account wizard.
//!
//! This crate contains pages, components, application state, the REST client,
//! and the pure guard/wizard state machines the whole UI is driven by.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
