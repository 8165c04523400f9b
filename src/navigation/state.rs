//! Shared navigation state.
//!
//! # Responsibilities
//! - Hand out monotonically increasing request sequence numbers
//! - Hold the single active teardown callback
//! - Publish the most recently rendered route
//! - Serialize every "still the latest?" check with the write it guards
//!
//! # Design Decisions
//! - Only the latest request may touch history, the container, the
//!   title or the teardown slot, and only while holding a `Commit`
//! - Beginning a request takes the same lock, so no request begins
//!   between another request's check and its write
//! - Page callbacks never run under the commit lock; a poisoned lock
//!   is recovered rather than propagated
//! - Readers see the current route through ArcSwap, without locking

use arc_swap::ArcSwapOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::page::{PageId, Teardown};
use crate::routing::ParsedRoute;

/// Teardown callback of the page currently on screen.
#[derive(Debug)]
pub struct ActivePage {
    pub page: PageId,
    pub teardown: Teardown,
}

impl ActivePage {
    pub fn teardown(self) {
        self.teardown.run(&self.page);
    }
}

/// Proof that the holder was the latest request when it was taken.
///
/// Every shared mutation a navigation makes happens while one is alive.
#[must_use = "the commit lock is released as soon as the guard is dropped"]
pub struct Commit<'a> {
    _lock: MutexGuard<'a, ()>,
}

#[derive(Debug, Default)]
pub struct NavigationState {
    latest: AtomicU64,
    commit: Mutex<()>,
    active: Mutex<Option<ActivePage>>,
    current: ArcSwapOption<ParsedRoute>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new navigation request.
    ///
    /// Returns its sequence number and the previous page's teardown,
    /// which the caller runs once the lock is released.
    pub fn begin(&self) -> (u64, Option<ActivePage>) {
        let _lock = self.lock_commit();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        (seq, self.take_active())
    }

    /// Take the commit lock if `seq` is still the newest request.
    pub fn commit(&self, seq: u64) -> Option<Commit<'_>> {
        let lock = self.lock_commit();
        self.is_latest(seq).then(|| Commit { _lock: lock })
    }

    /// True while no newer request has begun.
    ///
    /// Advisory only; use `commit` before mutating anything.
    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    /// Sequence number of the newest request.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Remove the active teardown, leaving the slot empty.
    pub fn take_active(&self) -> Option<ActivePage> {
        self.slot().take()
    }

    /// Install the teardown of a freshly rendered page.
    ///
    /// Returns whatever occupied the slot before, which the caller must run.
    pub fn install(&self, page: PageId, teardown: Option<Teardown>) -> Option<ActivePage> {
        let next = teardown.map(|teardown| ActivePage { page, teardown });
        std::mem::replace(&mut *self.slot(), next)
    }

    pub fn has_active(&self) -> bool {
        self.slot().is_some()
    }

    /// Page id whose teardown is currently installed.
    pub fn active_page(&self) -> Option<PageId> {
        self.slot().as_ref().map(|active| active.page.clone())
    }

    pub fn publish(&self, route: ParsedRoute) {
        self.current.store(Some(Arc::new(route)));
    }

    /// Route of the most recently completed navigation.
    pub fn current(&self) -> Option<Arc<ParsedRoute>> {
        self.current.load_full()
    }

    fn lock_commit(&self) -> MutexGuard<'_, ()> {
        self.commit.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self) -> MutexGuard<'_, Option<ActivePage>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
