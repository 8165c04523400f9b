//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(path, record_history)
//!     → state.rs (take a sequence number, take the active teardown)
//!     → routing (ParsedRoute)
//!     → host history push
//!     → loader (PageModule)            [suspends]
//!     → host container ← template
//!     → page init                      [suspends]
//!     → state.rs (install teardown, publish route)
//!     → host title, scroll
//! ```
//!
//! # Design Decisions
//! - Last request wins, by sequence number, not by completion order
//! - A superseded request's own teardown still runs, but it is never
//!   installed as the active one
//! - No failure escapes `navigate`

pub mod controller;
pub mod state;

pub use controller::{NavigationController, NavigationOutcome};
pub use state::{ActivePage, NavigationState};
