//! Client-side navigation engine for a single-page application.
//!
//! # Architecture Overview
//!
//! ```text
//!     Host events (click / hover / popstate)
//!         │
//!         ▼
//!     ┌──────────┐    ┌──────────┐    ┌────────────┐    ┌─────────┐
//!     │  events  │───▶│navigation│───▶│  routing   │    │  pages  │
//!     │ dispatch │    │controller│    │  matcher   │    │ modules │
//!     └────┬─────┘    └────┬─────┘    └────────────┘    └────▲────┘
//!          │ hover         │                                  │
//!          ▼               ▼                                  │
//!     ┌──────────┐    ┌──────────┐                            │
//!     │ prefetch │    │  loader  │────────────────────────────┘
//!     │  cache   │    │ registry │
//!     └──────────┘    └──────────┘
//!                          │
//!                          ▼
//!                     ┌──────────┐
//!                     │   host   │  container, history, title
//!                     └──────────┘
//! ```

// Core subsystems
pub mod config;
pub mod host;
pub mod page;
pub mod routing;

// Navigation engine
pub mod events;
pub mod loader;
pub mod navigation;
pub mod prefetch;

// Application pages
pub mod pages;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::NavigatorConfig;
pub use host::{Host, MemoryHost};
pub use lifecycle::{Navigator, Shutdown};
pub use navigation::NavigationOutcome;
pub use page::{PageId, PageModule};
pub use routing::{ParsedRoute, Router};
