//! Single delegated event loop.

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::events::{ClickDecision, HistorySync, HostEvent, HoverPrefetcher, LinkInterceptor};
use crate::host::Host;
use crate::navigation::NavigationController;

/// Routes host events to the navigation engine.
pub struct EventDispatcher {
    controller: Arc<NavigationController>,
    interceptor: LinkInterceptor,
    history: HistorySync,
    hover: Option<Arc<HoverPrefetcher>>,
}

impl EventDispatcher {
    /// `hover` is `None` when prefetching is disabled.
    pub fn new(
        host: Arc<dyn Host>,
        controller: Arc<NavigationController>,
        hover: Option<Arc<HoverPrefetcher>>,
    ) -> Self {
        Self {
            controller,
            interceptor: LinkInterceptor::new(host.clone()),
            history: HistorySync::new(host),
            hover,
        }
    }

    /// Handle one event. Returns the spawned work, if any was started.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, event: HostEvent) -> Option<JoinHandle<()>> {
        match event {
            HostEvent::Click(click) => match self.interceptor.decide(&click) {
                ClickDecision::Navigate(path) => Some(self.spawn_navigation(path, true)),
                skipped => {
                    tracing::trace!(decision = ?skipped, "Click left to the browser");
                    None
                }
            },
            HostEvent::PopState(pop) => {
                let path = self.history.path_for(&pop);
                Some(self.spawn_navigation(path, false))
            }
            HostEvent::Hover(hover_event) => {
                let hover = self.hover.clone()?;
                Some(tokio::spawn(async move {
                    hover.on_hover(&hover_event).await;
                }))
            }
        }
    }

    /// Consume events until the channel closes or shutdown fires.
    pub async fn run(
        self,
        mut events: mpsc::UnboundedReceiver<HostEvent>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!(prefetch = self.hover.is_some(), "Event dispatcher started");

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        self.dispatch(event);
                    }
                    None => {
                        tracing::info!("Event channel closed");
                        break;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Event dispatcher received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn spawn_navigation(&self, path: String, record_history: bool) -> JoinHandle<()> {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            controller.navigate(&path, record_history).await;
        })
    }
}
