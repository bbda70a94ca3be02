//! Imperative DOM client for the railway ticketing API.
//!
//! The counterpart to the reactive `web` crate: a `wasm-bindgen` entry point
//! wires event listeners onto the static markup in `static/index.html` and
//! updates the page by hand through `web-sys`. All API traffic goes through
//! the shared `api` crate, so both front ends speak the same conventions
//! (refund indexing, date transcoding, the ticket list's count row).
//!
//! [`render`] holds the pure HTML builders so they stay testable off-wasm;
//! `app` is the browser-only glue.

pub mod render;

#[cfg(target_arch = "wasm32")]
mod app;
