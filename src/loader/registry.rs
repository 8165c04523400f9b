//! Memoizing page loader.
//!
//! # Responsibilities
//! - Resolve each page id at most once per session
//! - Substitute the not-found module when resolution fails
//! - Remember that substitution under the id that failed
//!
//! # Design Decisions
//! - Append-only registry, no eviction
//! - No guard is held across an await point
//! - Concurrent first loads of one id may both resolve; the first
//!   insert wins and both callers get that module

use dashmap::DashMap;
use std::sync::Arc;

use crate::loader::source::ModuleSource;
use crate::observability::metrics;
use crate::page::{PageId, PageModule};
use crate::pages::NotFoundPage;

/// Loads and caches page modules.
pub struct PageLoader {
    source: Arc<dyn ModuleSource>,
    not_found: PageId,
    registry: DashMap<PageId, Arc<dyn PageModule>>,
}

impl PageLoader {
    /// Create a loader; `not_found` names the fallback page.
    pub fn new(source: Arc<dyn ModuleSource>, not_found: PageId) -> Self {
        Self {
            source,
            not_found,
            registry: DashMap::new(),
        }
    }

    /// Return the module for `page`. Never fails.
    pub async fn load(&self, page: &PageId) -> Arc<dyn PageModule> {
        if let Some(module) = self.cached(page) {
            return module;
        }

        let module = match self.source.resolve(page).await {
            Ok(module) => {
                tracing::debug!(page = %page, "Page module loaded");
                metrics::record_module_load("loaded");
                module
            }
            Err(e) => {
                tracing::error!(page = %page, error = %e, "Failed to load page module");
                self.fallback(page).await
            }
        };

        self.remember(page, module)
    }

    /// Whether `page` already has an entry in the registry.
    pub fn is_loaded(&self, page: &PageId) -> bool {
        self.registry.contains_key(page)
    }

    /// Number of page ids with a registry entry.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn cached(&self, page: &PageId) -> Option<Arc<dyn PageModule>> {
        self.registry.get(page).map(|entry| entry.value().clone())
    }

    fn remember(&self, page: &PageId, module: Arc<dyn PageModule>) -> Arc<dyn PageModule> {
        let module = self
            .registry
            .entry(page.clone())
            .or_insert(module)
            .value()
            .clone();
        metrics::record_registry_size(self.registry.len());
        module
    }

    async fn fallback(&self, failed: &PageId) -> Arc<dyn PageModule> {
        if *failed != self.not_found {
            if let Some(module) = self.cached(&self.not_found) {
                return module;
            }
            match self.source.resolve(&self.not_found).await {
                Ok(module) => {
                    metrics::record_module_load("fallback");
                    return self.remember(&self.not_found, module);
                }
                Err(e) => {
                    tracing::error!(page = %self.not_found, error = %e, "Failed to load not-found module");
                }
            }
        }

        metrics::record_module_load("builtin");
        let builtin: Arc<dyn PageModule> = Arc::new(NotFoundPage);
        self.remember(&self.not_found, builtin)
    }
}
