//! Session lifecycle: assembly, initial render and shutdown.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Router → PageLoader → NavigationController → Navigator
//!     → initial navigation to the current location (no history push)
//!
//! Shutdown (shutdown.rs):
//!     trigger() → event dispatcher leaves its loop
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then core, then event handling
//! - Session caches live as long as the Navigator that owns them

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::Navigator;
