//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the route table (absolute paths, page ids, no duplicates)
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavigatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::NavigatorConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("container_id must not be empty")]
    EmptyContainerId,

    #[error("not_found_page must not be empty")]
    EmptyNotFoundPage,

    #[error("route path {0:?} must start with '/'")]
    RelativeRoutePath(String),

    #[error("route {0:?} has an empty page id")]
    EmptyPageId(String),

    #[error("route path {0:?} is declared more than once")]
    DuplicateRoutePath(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &NavigatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.container_id.trim().is_empty() {
        errors.push(ValidationError::EmptyContainerId);
    }
    if config.not_found_page.trim().is_empty() {
        errors.push(ValidationError::EmptyNotFoundPage);
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativeRoutePath(route.path.clone()));
        }
        if route.page.trim().is_empty() {
            errors.push(ValidationError::EmptyPageId(route.path.clone()));
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoutePath(route.path.clone()));
        }
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
