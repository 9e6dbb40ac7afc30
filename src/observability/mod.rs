//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! pinning / blockchain / pipeline / http produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! Signing keys and pinning secrets never appear in either stream.

pub mod logging;
pub mod metrics;
