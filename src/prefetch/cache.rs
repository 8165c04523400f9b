//! Consume-once cache of in-flight page data fetches.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::fmt;
use std::future::Future;

use crate::observability::metrics;

/// Composite cache key: two path segments joined by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefetchKey(String);

impl PrefetchKey {
    pub fn new(first: &str, second: &str) -> Self {
        Self(format!("{first}/{second}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrefetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pending or settled prefetch. `None` means the fetch failed.
pub type PrefetchFuture<T> = Shared<BoxFuture<'static, Option<T>>>;

/// Keyed store of prefetched data, each entry consumed at most once.
///
/// Producers are spawned as soon as they are scheduled, so the fetch
/// runs whether or not anybody is waiting on it yet.
pub struct PrefetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    entries: DashMap<PrefetchKey, PrefetchFuture<T>>,
}

impl<T> PrefetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Start the fetch built by `producer` unless `key` has an
    /// unconsumed entry; `producer` is not called in that case.
    ///
    /// Returns false when the key was already scheduled. Must be called
    /// from within a tokio runtime.
    pub fn schedule<P, F, E>(&self, key: PrefetchKey, producer: P) -> bool
    where
        P: FnOnce() -> F,
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        match self.entries.entry(key) {
            Entry::Occupied(_) => {
                metrics::record_prefetch("duplicate");
                false
            }
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                let handle = tokio::spawn(producer());
                let pending = async move {
                    match handle.await {
                        Ok(Ok(value)) => Some(value),
                        Ok(Err(e)) => {
                            tracing::debug!(key = %key, error = %e, "Prefetch failed");
                            None
                        }
                        Err(e) => {
                            tracing::warn!(key = %key, error = %e, "Prefetch task aborted");
                            None
                        }
                    }
                }
                .boxed()
                .shared();

                slot.insert(pending);
                metrics::record_prefetch("scheduled");
                true
            }
        }
    }

    /// Remove and return the entry for `key`, if any.
    pub fn consume(&self, key: &PrefetchKey) -> Option<PrefetchFuture<T>> {
        self.entries.remove(key).map(|(_, pending)| pending)
    }

    /// Use the prefetched value for `key` when there is a good one,
    /// otherwise run `direct`.
    pub async fn take_or_fetch<F, Fut, E>(&self, key: &PrefetchKey, direct: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.consume(key) {
            Some(pending) => match pending.await {
                Some(value) => {
                    metrics::record_prefetch("hit");
                    return Ok(value);
                }
                None => {
                    tracing::debug!(key = %key, "Prefetched entry failed, fetching directly");
                    metrics::record_prefetch("failed");
                }
            },
            None => metrics::record_prefetch("miss"),
        }
        direct().await
    }

    pub fn contains(&self, key: &PrefetchKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PrefetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
