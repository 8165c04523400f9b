//! Shared utilities for navigation integration tests.

#![allow(dead_code)]

use futures_util::future::FutureExt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use spa_router::config::{NavigatorConfig, RouteConfig};
use spa_router::host::{HistoryState, Host, MemoryHost};
use spa_router::loader::{LoadError, StaticModules};
use spa_router::page::{InitFuture, PageError, PageId, PageModule, RouteParams, Teardown};
use spa_router::Navigator;

/// A page whose behavior each test scripts.
pub struct ScriptedPage {
    title: String,
    markup: String,
    broken_template: bool,
    failing_init: bool,
    init_gate: Option<Arc<Notify>>,
    with_teardown: bool,
    pub inits: Arc<AtomicUsize>,
    pub teardowns: Arc<AtomicUsize>,
}

impl ScriptedPage {
    pub fn new(name: &str) -> Self {
        Self {
            title: format!("{name} title"),
            markup: format!("<h1>{name}</h1>"),
            broken_template: false,
            failing_init: false,
            init_gate: None,
            with_teardown: true,
            inits: Arc::new(AtomicUsize::new(0)),
            teardowns: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn broken_template(mut self) -> Self {
        self.broken_template = true;
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.failing_init = true;
        self
    }

    /// Suspend init until the gate is notified.
    pub fn gated_init(mut self, gate: Arc<Notify>) -> Self {
        self.init_gate = Some(gate);
        self
    }

    pub fn without_teardown(mut self) -> Self {
        self.with_teardown = false;
        self
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn teardown_count(&self) -> usize {
        self.teardowns.load(Ordering::SeqCst)
    }

    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }
}

impl PageModule for ScriptedPage {
    fn title(&self, _params: &RouteParams) -> Option<String> {
        Some(self.title.clone())
    }

    fn template(&self, _params: &RouteParams) -> Result<Option<String>, PageError> {
        if self.broken_template {
            return Err(PageError::Template("missing partial".into()));
        }
        Ok(Some(self.markup.clone()))
    }

    fn init(&self, _params: &RouteParams) -> Option<InitFuture> {
        let gate = self.init_gate.clone();
        let failing = self.failing_init;
        let with_teardown = self.with_teardown;
        let inits = self.inits.clone();
        let teardowns = self.teardowns.clone();

        Some(
            async move {
                inits.fetch_add(1, Ordering::SeqCst);
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                if failing {
                    return Err(PageError::Init("listener target missing".into()));
                }
                Ok(with_teardown.then(|| {
                    Teardown::new(move || {
                        teardowns.fetch_add(1, Ordering::SeqCst);
                    })
                }))
            }
            .boxed(),
        )
    }
}

/// Builds a navigator over scripted pages, each reachable at `/{name}`.
pub struct Harness {
    pub config: NavigatorConfig,
    modules: StaticModules,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            config: NavigatorConfig {
                routes: Vec::new(),
                ..NavigatorConfig::default()
            },
            modules: StaticModules::new(),
        }
    }

    /// Route `/{name}` to `page`.
    pub fn page(mut self, name: &str, page: Arc<dyn PageModule>) -> Self {
        let path = if name == "home" { "/".to_string() } else { format!("/{name}") };
        self.config.routes.push(RouteConfig::new(path, name));
        self.modules = self.modules.with(PageId::new(name), page);
        self
    }

    /// Register a module reachable only through the built-in patterns.
    pub fn module(mut self, page: PageId, module: Arc<dyn PageModule>) -> Self {
        self.modules = self.modules.with(page, module);
        self
    }

    /// Route `/{name}` to a module that suspends until `gate` is notified.
    pub fn gated_page(mut self, name: &str, page: Arc<dyn PageModule>, gate: Arc<Notify>) -> Self {
        self.config
            .routes
            .push(RouteConfig::new(format!("/{name}"), name));
        self.modules = self.modules.with_factory(PageId::new(name), move || {
            let gate = gate.clone();
            let page = page.clone();
            async move {
                gate.notified().await;
                Ok::<_, LoadError>(page)
            }
        });
        self
    }

    /// Route `/{name}` to a module that never loads.
    pub fn broken_page(mut self, name: &str) -> Self {
        let page = PageId::new(name);
        self.config
            .routes
            .push(RouteConfig::new(format!("/{name}"), name));
        self.modules = self.modules.with_factory(page.clone(), move || {
            let page = page.clone();
            async move {
                Err::<Arc<dyn PageModule>, _>(LoadError::Failed {
                    page,
                    reason: "chunk request failed".into(),
                })
            }
        });
        self
    }

    pub fn build(self, host: Arc<MemoryHost>) -> Navigator {
        self.build_on(host)
    }

    pub fn build_on(self, host: Arc<dyn Host>) -> Navigator {
        Navigator::new(&self.config, host, Arc::new(self.modules))
    }
}

/// A memory host whose container can be detached, and whose container
/// writes can block the calling thread for one particular markup.
pub struct TestHost {
    pub memory: Arc<MemoryHost>,
    detached: AtomicBool,
    stall_markup: Option<String>,
    stall_for: Duration,
    stalling: AtomicBool,
}

impl TestHost {
    pub fn new(memory: Arc<MemoryHost>) -> Self {
        Self {
            memory,
            detached: AtomicBool::new(false),
            stall_markup: None,
            stall_for: Duration::ZERO,
            stalling: AtomicBool::new(false),
        }
    }

    /// Block inside `replace_container` whenever `markup` is written.
    pub fn stall_on(mut self, markup: &str, duration: Duration) -> Self {
        self.stall_markup = Some(markup.to_string());
        self.stall_for = duration;
        self
    }

    /// Whether a stalled write has started.
    pub fn is_stalling(&self) -> bool {
        self.stalling.load(Ordering::SeqCst)
    }

    pub fn set_detached(&self, detached: bool) {
        self.detached.store(detached, Ordering::SeqCst);
    }
}

impl Host for TestHost {
    fn location_path(&self) -> String {
        self.memory.location_path()
    }

    fn has_container(&self, id: &str) -> bool {
        !self.detached.load(Ordering::SeqCst) && self.memory.has_container(id)
    }

    fn replace_container(&self, id: &str, markup: &str) {
        if self.stall_markup.as_deref() == Some(markup) {
            self.stalling.store(true, Ordering::SeqCst);
            std::thread::sleep(self.stall_for);
        }
        self.memory.replace_container(id, markup);
    }

    fn push_history(&self, state: HistoryState) {
        self.memory.push_history(state);
    }

    fn set_title(&self, title: &str) {
        self.memory.set_title(title);
    }

    fn scroll_to_top(&self) {
        self.memory.scroll_to_top();
    }

    fn set_element_text(&self, id: &str, text: &str) {
        self.memory.set_element_text(id, text);
    }

    fn set_element_html(&self, id: &str, markup: &str) {
        self.memory.set_element_html(id, markup);
    }
}

pub fn memory_host() -> Arc<MemoryHost> {
    Arc::new(MemoryHost::new("/", "spa-content"))
}

/// Yield to the runtime until `condition` holds, failing after a second.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    let waiting = async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(1), waiting)
        .await
        .expect("condition not reached in time");
}

/// Run `fut` with a one-second timeout.
pub async fn within<F: Future>(fut: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(1), fut)
        .await
        .expect("future did not complete in time")
}
