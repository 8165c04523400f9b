//! In-memory host.
//!
//! Keeps a history stack with a cursor, so back and forward can be
//! simulated the way a browser would report them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::host::{HistoryState, Host, PopStateEvent};

#[derive(Debug, Clone)]
struct Entry {
    path: String,
    state: Option<HistoryState>,
}

#[derive(Debug)]
struct Inner {
    container_id: String,
    container: Option<String>,
    title: String,
    entries: Vec<Entry>,
    cursor: usize,
    pushes: usize,
    scroll_resets: usize,
    elements: BTreeMap<String, String>,
}

/// Point-in-time view of a [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostSnapshot {
    pub location: String,
    pub title: String,
    pub container: Option<String>,
    pub history_len: usize,
    pub pushes: usize,
    pub scroll_resets: usize,
    pub elements: BTreeMap<String, String>,
}

/// A host that records every effect in memory.
#[derive(Debug)]
pub struct MemoryHost {
    inner: Mutex<Inner>,
}

impl MemoryHost {
    /// Create a host at `path` with an empty container named `container_id`.
    pub fn new(path: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                container_id: container_id.into(),
                container: Some(String::new()),
                title: String::new(),
                entries: vec![Entry {
                    path: path.into(),
                    state: None,
                }],
                cursor: 0,
                pushes: 0,
                scroll_resets: 0,
                elements: BTreeMap::new(),
            }),
        }
    }

    /// Create a host whose document has no render container at all.
    pub fn without_container(path: impl Into<String>) -> Self {
        let host = Self::new(path, "");
        host.lock().container = None;
        host
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move one entry back, as the browser's back button would.
    pub fn go_back(&self) -> Option<PopStateEvent> {
        let mut inner = self.lock();
        if inner.cursor == 0 {
            return None;
        }
        inner.cursor -= 1;
        Some(PopStateEvent {
            state: inner.entries[inner.cursor].state.clone(),
        })
    }

    /// Move one entry forward.
    pub fn go_forward(&self) -> Option<PopStateEvent> {
        let mut inner = self.lock();
        if inner.cursor + 1 >= inner.entries.len() {
            return None;
        }
        inner.cursor += 1;
        Some(PopStateEvent {
            state: inner.entries[inner.cursor].state.clone(),
        })
    }

    pub fn container(&self) -> Option<String> {
        self.lock().container.clone()
    }

    pub fn title(&self) -> String {
        self.lock().title.clone()
    }

    pub fn element(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).cloned()
    }

    pub fn snapshot(&self) -> HostSnapshot {
        let inner = self.lock();
        HostSnapshot {
            location: inner.entries[inner.cursor].path.clone(),
            title: inner.title.clone(),
            container: inner.container.clone(),
            history_len: inner.entries.len(),
            pushes: inner.pushes,
            scroll_resets: inner.scroll_resets,
            elements: inner.elements.clone(),
        }
    }
}

impl Host for MemoryHost {
    fn location_path(&self) -> String {
        let inner = self.lock();
        inner.entries[inner.cursor].path.clone()
    }

    fn has_container(&self, id: &str) -> bool {
        let inner = self.lock();
        inner.container.is_some() && inner.container_id == id
    }

    fn replace_container(&self, id: &str, markup: &str) {
        let mut inner = self.lock();
        if inner.container_id == id && inner.container.is_some() {
            inner.container = Some(markup.to_string());
            // the old page's elements are gone with its markup
            inner.elements.clear();
        }
    }

    fn push_history(&self, state: HistoryState) {
        let mut inner = self.lock();
        let next = inner.cursor + 1;
        inner.entries.truncate(next);
        inner.entries.push(Entry {
            path: state.path.clone(),
            state: Some(state),
        });
        inner.cursor = next;
        inner.pushes += 1;
    }

    fn set_title(&self, title: &str) {
        self.lock().title = title.to_string();
    }

    fn scroll_to_top(&self) {
        self.lock().scroll_resets += 1;
    }

    fn set_element_text(&self, id: &str, text: &str) {
        self.lock().elements.insert(id.to_string(), text.to_string());
    }

    fn set_element_html(&self, id: &str, markup: &str) {
        self.lock().elements.insert(id.to_string(), markup.to_string());
    }
}
