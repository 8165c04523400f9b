//! Delegated document and window events.
//!
//! # Data Flow
//! ```text
//! Host event channel (one subscription)
//!     → dispatch.rs
//!         Click    → intercept.rs (decide) → navigate(path, true)
//!         PopState → history.rs (recover path) → navigate(path, false)
//!         Hover    → hover.rs (match, load module) → PageModule::prefetch
//! ```
//!
//! # Design Decisions
//! - One delegated handler per event kind, no per-link listeners
//! - Decisions are synchronous; navigations are spawned so they may
//!   interleave like they do in a browser

pub mod dispatch;
pub mod history;
pub mod hover;
pub mod intercept;

use crate::host::PopStateEvent;

pub use dispatch::EventDispatcher;
pub use history::HistorySync;
pub use hover::HoverPrefetcher;
pub use intercept::{ClickDecision, LinkInterceptor};

/// The anchor element closest to an event's target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, as written in the markup.
    pub href: Option<String>,
    /// Raw `target` attribute.
    pub target: Option<String>,
    /// Whether the anchor carries a `download` attribute.
    pub download: bool,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_download(mut self) -> Self {
        self.download = true;
        self
    }
}

/// A click somewhere in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Closest enclosing anchor of the clicked element, if any.
    pub anchor: Option<Anchor>,
}

impl ClickEvent {
    pub fn on(anchor: Anchor) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }
}

/// The pointer moved over an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverEvent {
    /// Closest enclosing anchor of the hovered element, if any.
    pub anchor: Option<Anchor>,
}

impl HoverEvent {
    pub fn on(anchor: Anchor) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }
}

/// Every event the engine subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Click(ClickEvent),
    Hover(HoverEvent),
    PopState(PopStateEvent),
}
