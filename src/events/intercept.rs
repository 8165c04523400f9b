//! In-app link interception.
//!
//! # Decision Table
//! | Condition (checked in order)              | Decision     |
//! |-------------------------------------------|--------------|
//! | click not inside an anchor                | `NoAnchor`   |
//! | anchor without `href`                     | `NoHref`     |
//! | href with a scheme, or `//host/...`       | `External`   |
//! | `target="_blank"`                         | `NewContext` |
//! | `download` attribute                      | `Download`   |
//! | href starting with `#`                    | `HashOnly`   |
//! | anything else                             | `Navigate`   |
//!
//! Only `Navigate` prevents the browser's default handling.

use std::sync::Arc;
use url::Url;

use crate::events::ClickEvent;
use crate::host::Host;

/// What to do with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickDecision {
    NoAnchor,
    NoHref,
    External,
    NewContext,
    Download,
    HashOnly,
    /// Prevent default and navigate to this absolute path.
    Navigate(String),
}

impl ClickDecision {
    /// Whether the browser's own navigation must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, ClickDecision::Navigate(_))
    }
}

/// Decides which clicks become in-app navigations.
pub struct LinkInterceptor {
    host: Arc<dyn Host>,
}

impl LinkInterceptor {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Classify a click, resolving relative hrefs against the current path.
    pub fn decide(&self, event: &ClickEvent) -> ClickDecision {
        let Some(anchor) = &event.anchor else {
            return ClickDecision::NoAnchor;
        };
        let href = match anchor.href.as_deref() {
            Some(href) if !href.is_empty() => href,
            _ => return ClickDecision::NoHref,
        };

        if is_external(href) {
            return ClickDecision::External;
        }
        if anchor
            .target
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("_blank"))
        {
            return ClickDecision::NewContext;
        }
        if anchor.download {
            return ClickDecision::Download;
        }
        if href.starts_with('#') {
            return ClickDecision::HashOnly;
        }

        ClickDecision::Navigate(resolve_href(href, &self.host.location_path()))
    }
}

/// Absolute URLs with any scheme, and protocol-relative URLs.
pub fn is_external(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}

/// Resolve `href` against `current_path`.
///
/// Absolute paths are returned as-is. Relative ones replace the final
/// segment of the current path, then repeated separators are collapsed.
pub fn resolve_href(href: &str, current_path: &str) -> String {
    if href.starts_with('/') {
        return href.to_string();
    }
    let base = current_path
        .rfind('/')
        .map(|i| &current_path[..i])
        .unwrap_or("");
    collapse_separators(&format!("{base}/{href}"))
}

fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Anchor;
    use crate::host::MemoryHost;

    fn interceptor_at(path: &str) -> LinkInterceptor {
        LinkInterceptor::new(Arc::new(MemoryHost::new(path, "spa-content")))
    }

    fn decide(anchor: Anchor) -> ClickDecision {
        interceptor_at("/alice/oak").decide(&ClickEvent::on(anchor))
    }

    #[test]
    fn test_skips() {
        let interceptor = interceptor_at("/");
        assert_eq!(interceptor.decide(&ClickEvent::default()), ClickDecision::NoAnchor);
        assert_eq!(
            interceptor.decide(&ClickEvent::on(Anchor::default())),
            ClickDecision::NoHref
        );
        assert_eq!(decide(Anchor::new("")), ClickDecision::NoHref);
        assert_eq!(decide(Anchor::new("https://example.com/x")), ClickDecision::External);
        assert_eq!(decide(Anchor::new("http://example.com")), ClickDecision::External);
        assert_eq!(decide(Anchor::new("//cdn.example.com/a.js")), ClickDecision::External);
        assert_eq!(decide(Anchor::new("mailto:hi@example.com")), ClickDecision::External);
        assert_eq!(
            decide(Anchor::new("/terms").with_target("_blank")),
            ClickDecision::NewContext
        );
        assert_eq!(
            decide(Anchor::new("/terms").with_target("_BLANK")),
            ClickDecision::NewContext
        );
        assert_eq!(
            decide(Anchor::new("/export.json").with_download()),
            ClickDecision::Download
        );
        assert_eq!(decide(Anchor::new("#comments")), ClickDecision::HashOnly);
    }

    #[test]
    fn test_external_wins_over_target() {
        let decision = decide(Anchor::new("https://example.com").with_target("_blank"));
        assert_eq!(decision, ClickDecision::External);
        assert!(!decision.prevents_default());
    }

    #[test]
    fn test_same_context_target_navigates() {
        assert_eq!(
            decide(Anchor::new("/terms").with_target("_self")),
            ClickDecision::Navigate("/terms".into())
        );
    }

    #[test]
    fn test_absolute_and_relative() {
        let decision = decide(Anchor::new("/settings"));
        assert!(decision.prevents_default());
        assert_eq!(decision, ClickDecision::Navigate("/settings".into()));

        assert_eq!(decide(Anchor::new("pine")), ClickDecision::Navigate("/alice/pine".into()));
    }

    #[test]
    fn test_resolve_href() {
        assert_eq!(resolve_href("terms", "/"), "/terms");
        assert_eq!(resolve_href("terms", "/alice"), "/terms");
        assert_eq!(resolve_href("pine", "/alice/oak"), "/alice/pine");
        assert_eq!(resolve_href("pine", "/alice/"), "/alice/pine");
        assert_eq!(resolve_href("./pine", "/alice/oak"), "/alice/./pine");
        assert_eq!(resolve_href("pine", "//alice//oak"), "/alice/pine");
        assert_eq!(resolve_href("/x//y", "/alice/oak"), "/x//y");
    }
}
