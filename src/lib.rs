//! # cuenta-client
//!
//! Leptos + WASM frontend for the account screen: registration and login
//! forms backed by a REST backend, with durable token persistence and
//! role-based routing after authentication.
//!
//! This crate contains pages, components, application state, network
//! types, and browser utilities. Browser-only code is gated behind the
//! `hydrate` feature so the pure logic stays testable on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
