//! Document host abstraction.
//!
//! # Data Flow
//! ```text
//! Navigation engine
//!     → Host::replace_container (page markup)
//!     → Host::push_history (address bar + history entry)
//!     → Host::set_title / scroll_to_top (finalizing)
//! Page modules
//!     → Host::set_element_text / set_element_html (late data)
//! ```
//!
//! # Design Decisions
//! - The engine owns the container's contents once routing is active
//! - History entries carry the navigated path as their state
//! - memory.rs records every effect for tests and the CLI

pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::{HostSnapshot, MemoryHost};

/// State stored alongside each pushed history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub path: String,
}

impl HistoryState {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Browser back/forward notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopStateEvent {
    /// State of the entry the browser moved to, if it had one.
    pub state: Option<HistoryState>,
}

/// Everything the navigation engine needs from the document and window.
pub trait Host: Send + Sync {
    /// Path currently shown in the address bar.
    fn location_path(&self) -> String;

    /// Whether an element with this id exists.
    fn has_container(&self, id: &str) -> bool;

    /// Replace the contents of the element with this id.
    fn replace_container(&self, id: &str, markup: &str);

    /// Push a history entry and show its path in the address bar.
    fn push_history(&self, state: HistoryState);

    fn set_title(&self, title: &str);

    fn scroll_to_top(&self);

    /// Set the text content of an element inside the rendered page.
    fn set_element_text(&self, id: &str, text: &str);

    /// Set the inner markup of an element inside the rendered page.
    fn set_element_html(&self, id: &str, markup: &str);
}
