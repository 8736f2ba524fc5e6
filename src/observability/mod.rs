//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Form flows and service client produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr via tracing-subscriber
//!     → whichever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the client into every log line for a call
//! - Metrics are cheap and are no-ops without an installed recorder

pub mod logging;
pub mod metrics;
