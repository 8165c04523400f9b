//! Parametric route matching.
//!
//! # Responsibilities
//! - Match paths by segment count (`/:username`, `/:username/:slug`)
//! - Decode each captured segment as a URI component
//! - Refuse file-like paths (last segment containing a `.`)
//!
//! # Design Decisions
//! - Patterns only run after the static table missed
//! - A segment that fails to decode is captured verbatim
//! - No regex to guarantee O(n) matching

use percent_encoding::percent_decode_str;
use std::fmt;

use crate::page::{PageId, RouteParams};
use crate::routing::router::ParsedRoute;

/// Trait for capturing a route from the non-empty segments of a path.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns the parsed route if the segments fit this pattern.
    fn capture(&self, segments: &[&str]) -> Option<ParsedRoute>;
}

/// Matches a fixed number of segments, binding each to a parameter name.
#[derive(Debug, Clone)]
pub struct SegmentPattern {
    page: PageId,
    names: Vec<&'static str>,
}

impl SegmentPattern {
    pub fn new(page: PageId, names: &[&'static str]) -> Self {
        Self {
            page,
            names: names.to_vec(),
        }
    }

    /// `/:username/:slug` → asset detail page.
    pub fn asset() -> Self {
        Self::new(PageId::ASSET, &["username", "slug"])
    }

    /// `/:username` → user profile page.
    pub fn user() -> Self {
        Self::new(PageId::USER, &["username"])
    }
}

impl Matcher for SegmentPattern {
    fn capture(&self, segments: &[&str]) -> Option<ParsedRoute> {
        if segments.len() != self.names.len() {
            return None;
        }
        // `foo.html`, `tree.json` and friends are files, not names
        if segments.last()?.contains('.') {
            return None;
        }

        let params: RouteParams = self
            .names
            .iter()
            .zip(segments)
            .map(|(name, segment)| (name.to_string(), decode_component(segment)))
            .collect();

        Some(ParsedRoute {
            page: self.page.clone(),
            params,
        })
    }
}

/// Percent-decode a single path segment.
pub fn decode_component(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}
