//! Path to page resolution.
//!
//! # Data Flow
//! ```text
//! Path (from a click, popstate or programmatic call)
//!     → router.rs (exact lookup in the static table)
//!     → matcher.rs (segment patterns on a miss)
//!     → Return: ParsedRoute, or the 404 route
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Keep declaration order
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - The table is built once per session and never mutated
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use router::{ParsedRoute, RouteRule, Router};
