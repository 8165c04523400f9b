//! Navigation state machine.
//!
//! # States
//! ```text
//! Idle → TearingDown → Matching → HistoryUpdate → Loading* → Rendering
//!      → Initializing* → Finalizing → Idle
//! ```
//! `*` marks suspension points. Another `navigate` call may begin while
//! one is suspended, on this thread or another. Every write to history,
//! the container, the title or the teardown slot happens under a
//! `Commit` taken only if the request is still the latest, so a
//! superseded request stops without touching any of them.

use futures_util::FutureExt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::Instrument;

use crate::config::NavigatorConfig;
use crate::host::{HistoryState, Host};
use crate::loader::PageLoader;
use crate::navigation::state::{ActivePage, NavigationState};
use crate::observability::metrics;
use crate::page::{PageError, PageModule, RouteParams, Teardown};
use crate::routing::{ParsedRoute, Router};

/// How a single `navigate` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The page was rendered and is now current.
    Rendered,
    /// A newer navigation began before this one could finish.
    Superseded,
    /// The error markup was rendered instead of the page.
    Failed,
    /// The document has no render container.
    NoContainer,
}

impl NavigationOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            NavigationOutcome::Rendered => "rendered",
            NavigationOutcome::Superseded => "superseded",
            NavigationOutcome::Failed => "failed",
            NavigationOutcome::NoContainer => "no_container",
        }
    }
}

/// Drives one navigation at a time into the persistent container.
pub struct NavigationController {
    host: Arc<dyn Host>,
    router: Arc<Router>,
    loader: Arc<PageLoader>,
    state: NavigationState,
    container_id: String,
    error_markup: String,
}

impl NavigationController {
    pub fn new(
        host: Arc<dyn Host>,
        router: Arc<Router>,
        loader: Arc<PageLoader>,
        config: &NavigatorConfig,
    ) -> Self {
        Self {
            host,
            router,
            loader,
            state: NavigationState::new(),
            container_id: config.container_id.clone(),
            error_markup: config.error_markup.clone(),
        }
    }

    /// Navigate to `path`, pushing a history entry when `record_history`.
    ///
    /// Never fails: errors are logged and end in the error markup.
    pub async fn navigate(&self, path: &str, record_history: bool) -> NavigationOutcome {
        if !self.host.has_container(&self.container_id) {
            tracing::error!(container = %self.container_id, path = %path, "SPA content container not found");
            metrics::record_navigation(NavigationOutcome::NoContainer.as_str());
            return NavigationOutcome::NoContainer;
        }

        let (seq, previous) = self.state.begin();
        let span = tracing::debug_span!("navigate", seq, path = %path);

        let outcome = self
            .run(seq, previous, path, record_history)
            .instrument(span)
            .await;
        metrics::record_navigation(outcome.as_str());
        outcome
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Route of the most recently completed navigation.
    pub fn current(&self) -> Option<Arc<ParsedRoute>> {
        self.state.current()
    }

    async fn run(
        &self,
        seq: u64,
        previous: Option<ActivePage>,
        path: &str,
        record_history: bool,
    ) -> NavigationOutcome {
        if let Some(active) = previous {
            tracing::debug!(page = %active.page, "Tearing down previous page");
            active.teardown();
        }

        let route = self.router.match_route(path);
        tracing::debug!(page = %route.page, params = ?route.params, "Route matched");

        if record_history {
            let Some(_commit) = self.state.commit(seq) else {
                return superseded(&route, "before history update");
            };
            self.host.push_history(HistoryState::new(path));
        }

        let module = self.loader.load(&route.page).await;
        if !self.state.is_latest(seq) {
            return superseded(&route, "while loading");
        }

        let rendered = render(module.as_ref(), &route.params);
        {
            let Some(_commit) = self.state.commit(seq) else {
                return superseded(&route, "before rendering");
            };
            match &rendered {
                Ok(markup) => self.host.replace_container(&self.container_id, markup),
                Err(_) => self.host.replace_container(&self.container_id, &self.error_markup),
            }
        }
        if let Err(e) = rendered {
            tracing::error!(page = %route.page, error = %e, "Page load error");
            return NavigationOutcome::Failed;
        }

        let teardown = self.initialize(module.as_ref(), &route).await;
        let title = module.title(&route.params);

        let finalized = match self.state.commit(seq) {
            Some(_commit) => {
                let displaced = self.state.install(route.page.clone(), teardown);
                if let Some(title) = &title {
                    self.host.set_title(title);
                }
                self.host.scroll_to_top();
                self.state.publish(route.clone());
                Ok(displaced)
            }
            None => Err(teardown),
        };

        match finalized {
            Ok(displaced) => {
                if let Some(displaced) = displaced {
                    tracing::warn!(page = %displaced.page, "Displaced a teardown that was never run");
                    displaced.teardown();
                }
                tracing::debug!(page = %route.page, "Navigation complete");
                NavigationOutcome::Rendered
            }
            Err(teardown) => {
                if let Some(teardown) = teardown {
                    teardown.run(&route.page);
                }
                superseded(&route, "while initializing")
            }
        }
    }

    /// Run the page's init hook. Failures are logged and yield no teardown.
    async fn initialize(&self, module: &dyn PageModule, route: &ParsedRoute) -> Option<Teardown> {
        let init = match catch_unwind(AssertUnwindSafe(|| module.init(&route.params))) {
            Ok(Some(init)) => init,
            Ok(None) => return None,
            Err(_) => {
                tracing::error!(page = %route.page, "Page init panicked");
                return None;
            }
        };

        match AssertUnwindSafe(init).catch_unwind().await {
            Ok(Ok(teardown)) => teardown,
            Ok(Err(e)) => {
                tracing::error!(page = %route.page, error = %e, "Page init error");
                None
            }
            Err(_) => {
                tracing::error!(page = %route.page, "Page init panicked");
                None
            }
        }
    }
}

fn superseded(route: &ParsedRoute, stage: &'static str) -> NavigationOutcome {
    tracing::debug!(page = %route.page, stage, "Navigation superseded");
    NavigationOutcome::Superseded
}

/// Produce the page markup; an absent template renders nothing.
fn render(module: &dyn PageModule, params: &RouteParams) -> Result<String, PageError> {
    catch_unwind(AssertUnwindSafe(|| module.template(params)))
        .unwrap_or_else(|_| Err(PageError::Template("template panicked".to_string())))
        .map(Option::unwrap_or_default)
}

