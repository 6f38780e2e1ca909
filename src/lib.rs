//! # content-admin
//!
//! Leptos + WASM admin UI for editing per-chapter learning content: PDF
//! links, video playlists, rich-text notes, and multiple-choice questions.
//!
//! The data model, key scheme, import parser, and load/save rules live in the
//! `content` crate; this crate supplies the browser-facing pieces (HTTP and
//! `localStorage` backends, the editor modal, and the fault boundary).


pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app into `<body>`.
///
/// The editor is a static client-side bundle; there is no server render to hydrate.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
