//! Route lookup.
//!
//! # Responsibilities
//! - Store the static route table
//! - Resolve a path to a page id and its parameters
//! - Fall back to the not-found page for anything unmapped
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - Exact static matches always beat parametric patterns
//! - Total: every path yields a route, a miss is not an error

use serde::Serialize;

use crate::config::RouteConfig;
use crate::page::{PageId, RouteParams};
use crate::routing::matcher::{Matcher, SegmentPattern};

/// An exact path mapped to a page id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub path: String,
    pub page: PageId,
}

/// Result of matching a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRoute {
    pub page: PageId,
    pub params: RouteParams,
}

impl ParsedRoute {
    pub fn not_found() -> Self {
        Self {
            page: PageId::NOT_FOUND,
            params: RouteParams::new(),
        }
    }

    /// True when the route carries no parameters.
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }
}

/// Maps paths to pages. First match wins.
#[derive(Debug)]
pub struct Router {
    rules: Vec<RouteRule>,
    patterns: Vec<Box<dyn Matcher>>,
}

impl Router {
    /// Build a router from a static table plus the built-in patterns.
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self {
            rules,
            patterns: vec![
                Box::new(SegmentPattern::asset()),
                Box::new(SegmentPattern::user()),
            ],
        }
    }

    /// Build from configured routes, preserving their order.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        let rules = routes
            .iter()
            .map(|r| RouteRule {
                path: r.path.clone(),
                page: PageId::new(r.page.clone()),
            })
            .collect();
        Self::new(rules)
    }

    /// Resolve `path` to a route.
    pub fn match_route(&self, path: &str) -> ParsedRoute {
        let path = if path.is_empty() { "/" } else { path };

        if let Some(rule) = self.rules.iter().find(|r| r.path == path) {
            return ParsedRoute {
                page: rule.page.clone(),
                params: RouteParams::new(),
            };
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        self.patterns
            .iter()
            .find_map(|p| p.capture(&segments))
            .unwrap_or_else(ParsedRoute::not_found)
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::from_config(&crate::config::NavigatorConfig::default().routes)
    }
}
