//! Hover-driven data prefetching.
//!
//! # Data Flow
//! ```text
//! Hover over an in-app link
//!     → events::hover (match route, load page module)
//!     → PageModule::prefetch
//!     → cache.rs schedule (producer spawned immediately)
//!
//! Page init
//!     → cache.rs take_or_fetch (consume once, else fetch directly)
//! ```
//!
//! # Design Decisions
//! - Failures are cached as `None`, never propagated to the cache holder
//! - No time-based eviction; entries live until consumed
//! - First scheduling of a key wins

pub mod cache;

pub use cache::{PrefetchCache, PrefetchFuture, PrefetchKey};
