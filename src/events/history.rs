//! Back/forward replay.

use std::sync::Arc;

use crate::host::{Host, PopStateEvent};

/// Recovers the path a popstate event moved to.
pub struct HistorySync {
    host: Arc<dyn Host>,
}

impl HistorySync {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Path from the entry's state, else the address bar.
    ///
    /// The result is navigated to without recording history, since the
    /// browser has already moved its history pointer.
    pub fn path_for(&self, event: &PopStateEvent) -> String {
        event
            .state
            .as_ref()
            .map(|state| state.path.clone())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.host.location_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HistoryState, MemoryHost};

    #[test]
    fn test_path_from_state() {
        let sync = HistorySync::new(Arc::new(MemoryHost::new("/terms", "spa-content")));
        let event = PopStateEvent {
            state: Some(HistoryState::new("/alice/oak")),
        };
        assert_eq!(sync.path_for(&event), "/alice/oak");
    }

    #[test]
    fn test_falls_back_to_location() {
        let sync = HistorySync::new(Arc::new(MemoryHost::new("/terms", "spa-content")));
        assert_eq!(sync.path_for(&PopStateEvent::default()), "/terms");

        let empty = PopStateEvent {
            state: Some(HistoryState::new("")),
        };
        assert_eq!(sync.path_for(&empty), "/terms");
    }
}
