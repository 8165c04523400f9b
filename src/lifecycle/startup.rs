//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table and page loader from configuration
//! - Own the session-scoped registry and navigation state
//! - Perform the initial navigation
//! - Expose `navigate` for programmatic triggers

use std::sync::Arc;

use crate::config::NavigatorConfig;
use crate::events::{EventDispatcher, HoverPrefetcher};
use crate::host::Host;
use crate::loader::{ModuleSource, PageLoader};
use crate::navigation::{NavigationController, NavigationOutcome};
use crate::page::PageId;
use crate::routing::{ParsedRoute, Router};

/// The assembled navigation engine for one application session.
pub struct Navigator {
    host: Arc<dyn Host>,
    router: Arc<Router>,
    loader: Arc<PageLoader>,
    controller: Arc<NavigationController>,
    hover: Option<Arc<HoverPrefetcher>>,
}

impl Navigator {
    pub fn new(config: &NavigatorConfig, host: Arc<dyn Host>, source: Arc<dyn ModuleSource>) -> Self {
        let router = Arc::new(Router::from_config(&config.routes));
        let loader = Arc::new(PageLoader::new(
            source,
            PageId::new(config.not_found_page.clone()),
        ));
        let controller = Arc::new(NavigationController::new(
            host.clone(),
            router.clone(),
            loader.clone(),
            config,
        ));
        let hover = config
            .prefetch
            .enabled
            .then(|| Arc::new(HoverPrefetcher::new(router.clone(), loader.clone())));

        tracing::info!(
            routes = router.rules().len(),
            container = %config.container_id,
            prefetch = config.prefetch.enabled,
            "Navigator initialized"
        );

        Self {
            host,
            router,
            loader,
            controller,
            hover,
        }
    }

    /// Render whatever the address bar currently shows.
    pub async fn start(&self) -> NavigationOutcome {
        let path = self.host.location_path();
        tracing::info!(path = %path, "Initial navigation");
        self.controller.navigate(&path, false).await
    }

    /// Programmatic navigation; records a history entry.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        self.controller.navigate(path, true).await
    }

    /// Build the delegated event handler for this session.
    pub fn dispatcher(&self) -> EventDispatcher {
        EventDispatcher::new(self.host.clone(), self.controller.clone(), self.hover.clone())
    }

    pub fn match_route(&self, path: &str) -> ParsedRoute {
        self.router.match_route(path)
    }

    pub fn current(&self) -> Option<Arc<ParsedRoute>> {
        self.controller.current()
    }

    pub fn controller(&self) -> &Arc<NavigationController> {
        &self.controller
    }

    pub fn loader(&self) -> &Arc<PageLoader> {
        &self.loader
    }
}
