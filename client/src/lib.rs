//! # peerpoint-client
//!
//! Leptos browser UI for the PeerPoint forum.
//!
//! ARCHITECTURE
//! ============
//! `app` builds one [`app::AppContext`] (session store, refresh bus, auth and
//! toast signals) and hands it to every page and component as a prop. Pages
//! hold `peerpoint::forum` view-models in signals and re-run their loads when
//! the refresh bus fires. All HTTP goes through the shared `peerpoint` client.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
