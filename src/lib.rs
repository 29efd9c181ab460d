//! # blog-admin
//!
//! Leptos + WASM single-page admin client for a remote blog REST service,
//! with a floating AI chat widget backed by a conversational endpoint.
//!
//! This crate contains the page, components, application state, network
//! types, and the REST call layer. All persistence lives on the remote
//! service; the client holds only transient display state.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
