//! Navigator configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NavigatorConfig (validated, immutable)
//!     → route table and page registry built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once; the route table is static for the session
//! - Every section has defaults, so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ApiConfig;
pub use schema::NavigatorConfig;
pub use schema::ObservabilityConfig;
pub use schema::PrefetchConfig;
pub use schema::RouteConfig;
