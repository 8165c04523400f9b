//! Page module contract.
//!
//! # Data Flow
//! ```text
//! PageId (from the route matcher)
//!     → loader resolves Arc<dyn PageModule>
//!     → controller asks for template, init, title
//!     → init may hand back a Teardown
//!     → Teardown runs once when the page is replaced
//! ```
//!
//! # Design Decisions
//! - Every capability is optional; the defaults mean "absent"
//! - Capability absence is a no-op, never an error
//! - Teardown is consumed by value, so it cannot run twice

pub mod error;
pub mod teardown;

use futures_util::future::BoxFuture;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub use error::PageError;
pub use teardown::Teardown;

/// Parameters extracted from a path, keyed by name.
pub type RouteParams = BTreeMap<String, String>;

/// Future returned by a page's `init` capability.
pub type InitFuture = BoxFuture<'static, Result<Option<Teardown>, PageError>>;

/// Symbolic page name, used as the key for loading and caching modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(Cow<'static, str>);

impl PageId {
    pub const HOME: PageId = PageId::from_static("home");
    pub const LOGIN: PageId = PageId::from_static("login");
    pub const MY_ASSETS: PageId = PageId::from_static("my-assets");
    pub const UPLOAD: PageId = PageId::from_static("upload");
    pub const SETTINGS: PageId = PageId::from_static("settings");
    pub const CLAIM_USERNAME: PageId = PageId::from_static("claim-username");
    pub const TERMS: PageId = PageId::from_static("terms");
    pub const IMPRINT: PageId = PageId::from_static("imprint");
    pub const ASSET: PageId = PageId::from_static("asset");
    pub const USER: PageId = PageId::from_static("user");
    pub const NOT_FOUND: PageId = PageId::from_static("404");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// The unit of code implementing one page.
///
/// All methods have defaults that mean the capability is absent:
/// no title change, empty markup, no initialization, no prefetch.
pub trait PageModule: Send + Sync {
    /// Document title for this page.
    fn title(&self, _params: &RouteParams) -> Option<String> {
        None
    }

    /// Markup rendered into the container. `Ok(None)` renders nothing.
    fn template(&self, _params: &RouteParams) -> Result<Option<String>, PageError> {
        Ok(None)
    }

    /// Start the page once its markup is in place.
    fn init(&self, _params: &RouteParams) -> Option<InitFuture> {
        None
    }

    /// Speculatively load the data this page will need for `params`.
    fn prefetch(&self, _params: &RouteParams) {}
}
