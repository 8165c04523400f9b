//! Page hook error definitions.

use thiserror::Error;

/// Errors raised by a page module's own hooks.
#[derive(Debug, Error)]
pub enum PageError {
    /// Markup could not be produced.
    #[error("Template error: {0}")]
    Template(String),

    /// Initialization failed after the markup was rendered.
    #[error("Init error: {0}")]
    Init(String),

    /// A route parameter the page depends on was not supplied.
    #[error("Missing route parameter: {0}")]
    MissingParam(&'static str),
}
