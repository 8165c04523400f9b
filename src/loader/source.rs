//! Module sources.
//!
//! A source is how the loader obtains the code for a page id; it plays
//! the part a dynamic import plays in a browser bundle.

use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::page::{PageId, PageModule};

/// Future resolving to a page module.
pub type ModuleFuture = BoxFuture<'static, Result<Arc<dyn PageModule>, LoadError>>;

/// Errors that can occur while obtaining a page module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No module is registered for the page id.
    #[error("No module registered for page {0}")]
    Missing(PageId),

    /// The module exists but could not be produced.
    #[error("Failed to load page {page}: {reason}")]
    Failed { page: PageId, reason: String },
}

/// Resolves page ids to their modules.
pub trait ModuleSource: Send + Sync {
    fn resolve(&self, page: &PageId) -> ModuleFuture;
}

type Factory = Arc<dyn Fn() -> ModuleFuture + Send + Sync>;

/// A fixed set of module factories keyed by page id.
#[derive(Default, Clone)]
pub struct StaticModules {
    factories: HashMap<PageId, Factory>,
}

impl StaticModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module that is already constructed.
    pub fn with(self, page: PageId, module: Arc<dyn PageModule>) -> Self {
        self.with_factory(page, move || future::ready(Ok(module.clone())))
    }

    /// Register an asynchronous factory, invoked on every resolve.
    pub fn with_factory<F, Fut>(mut self, page: PageId, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn PageModule>, LoadError>> + Send + 'static,
    {
        self.factories
            .insert(page, Arc::new(move || factory().boxed()));
        self
    }

    pub fn contains(&self, page: &PageId) -> bool {
        self.factories.contains_key(page)
    }
}

impl ModuleSource for StaticModules {
    fn resolve(&self, page: &PageId) -> ModuleFuture {
        match self.factories.get(page) {
            Some(factory) => factory(),
            None => future::ready(Err(LoadError::Missing(page.clone()))).boxed(),
        }
    }
}
