//! Logging and metrics for the navigation engine.
//!
//! # Data Flow
//! ```text
//! Navigation engine produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → whichever metrics recorder the embedding app installs
//! ```
//!
//! # Design Decisions
//! - Every caught failure is logged, never silently dropped
//! - Without an installed recorder, metrics calls are no-ops

pub mod logging;
pub mod metrics;
