//! HTTP surface.
//!
//! # Routes
//! ```text
//! GET  /              → page.rs (browser form)
//! GET  /health        → "OK"
//! GET  /api/networks  → network presets
//! POST /api/wallet    → address derived from a key
//! POST /api/mint      → form.rs → MintPipeline::run → MintReceipt
//! ```

pub mod form;
pub mod handlers;
pub mod page;
pub mod server;

pub use server::{AppState, HttpServer};
