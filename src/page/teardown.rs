//! Page teardown callbacks.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::page::PageId;

/// Callback returned by a page's `init`, run when that page is replaced.
pub struct Teardown {
    callback: Box<dyn FnOnce() + Send>,
}

impl Teardown {
    pub fn new(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Run the callback. A panic inside it is caught and logged.
    pub fn run(self, page: &PageId) {
        if let Err(panic) = catch_unwind(AssertUnwindSafe(self.callback)) {
            tracing::error!(
                page = %page,
                reason = %panic_message(panic.as_ref()),
                "Page cleanup error"
            );
        }
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown").finish_non_exhaustive()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
