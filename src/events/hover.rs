//! Hover-triggered prefetch.

use std::sync::Arc;

use crate::events::HoverEvent;
use crate::loader::PageLoader;
use crate::routing::Router;

/// Asks the page behind a hovered link to prefetch its data.
pub struct HoverPrefetcher {
    router: Arc<Router>,
    loader: Arc<PageLoader>,
}

impl HoverPrefetcher {
    pub fn new(router: Arc<Router>, loader: Arc<PageLoader>) -> Self {
        Self { router, loader }
    }

    /// Returns true if a page's prefetch capability was invoked.
    ///
    /// Only absolute in-app paths that resolve to a parametric route
    /// qualify; static pages have nothing to prefetch.
    pub async fn on_hover(&self, event: &HoverEvent) -> bool {
        let Some(href) = event.anchor.as_ref().and_then(|a| a.href.as_deref()) else {
            return false;
        };
        if !href.starts_with('/') || href.starts_with("//") {
            return false;
        }

        let route = self.router.match_route(href);
        if route.is_static() {
            return false;
        }

        tracing::trace!(page = %route.page, href = %href, "Prefetching on hover");
        let module = self.loader.load(&route.page).await;
        module.prefetch(&route.params);
        true
    }
}
