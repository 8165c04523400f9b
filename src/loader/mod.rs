//! Page module loading.
//!
//! # Data Flow
//! ```text
//! PageId
//!     → registry.rs (cached? return it)
//!     → source.rs (resolve the module)
//!     → on failure: resolve the not-found module instead
//!     → cache the result under the requested id
//! ```

pub mod registry;
pub mod source;

pub use registry::PageLoader;
pub use source::{LoadError, ModuleFuture, ModuleSource, StaticModules};
