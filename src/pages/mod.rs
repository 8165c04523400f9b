//! Page modules shipped with the application.
//!
//! # Data Flow
//! ```text
//! default_modules(host, assets)
//!     → one PrefetchCache<Asset> for the session
//!     → StaticModules { page id → module }
//!     → handed to the Navigator as its ModuleSource
//! ```

pub mod asset;
pub mod not_found;
pub mod static_page;

use std::sync::Arc;

use crate::host::Host;
use crate::loader::StaticModules;
use crate::page::PageId;
use crate::prefetch::PrefetchCache;

pub use asset::{Asset, AssetError, AssetPage, AssetSource, HttpAssetSource};
pub use not_found::NotFoundPage;
pub use static_page::StaticPage;

/// Register every page of the application.
pub fn default_modules(host: Arc<dyn Host>, assets: Arc<dyn AssetSource>) -> StaticModules {
    let cache = Arc::new(PrefetchCache::new());

    StaticModules::new()
        .with(PageId::HOME, Arc::new(StaticPage::new(
            "Tree Clipper",
            r#"<h1>Tree Clipper</h1><p>Share node trees with a link.</p>"#,
        )))
        .with(PageId::LOGIN, Arc::new(StaticPage::new(
            "Login - Tree Clipper",
            r#"<h1>Login</h1><div id="login-form"></div>"#,
        )))
        .with(PageId::MY_ASSETS, Arc::new(StaticPage::new(
            "My Assets - Tree Clipper",
            r#"<h1>My Assets</h1><div id="asset-list"></div>"#,
        )))
        .with(PageId::UPLOAD, Arc::new(StaticPage::new(
            "Upload - Tree Clipper",
            r#"<h1>Upload Asset</h1><form id="upload-form"></form>"#,
        )))
        .with(PageId::SETTINGS, Arc::new(StaticPage::new(
            "Settings - Tree Clipper",
            r#"<h1>Settings</h1>"#,
        )))
        .with(PageId::CLAIM_USERNAME, Arc::new(StaticPage::new(
            "Claim Username - Tree Clipper",
            r#"<h1>Claim your username</h1><form id="claim-form"></form>"#,
        )))
        .with(PageId::TERMS, Arc::new(StaticPage::new(
            "Terms - Tree Clipper",
            r#"<h1>Terms of Service</h1>"#,
        )))
        .with(PageId::IMPRINT, Arc::new(StaticPage::new(
            "Imprint - Tree Clipper",
            r#"<h1>Imprint</h1>"#,
        )))
        .with(PageId::USER, Arc::new(StaticPage::with_template(
            "Profile - Tree Clipper",
            |params| {
                let username = params.get("username").map(String::as_str).unwrap_or("");
                format!(r#"<h1>@{}</h1><div id="user-assets"></div>"#, escape_html(username))
            },
        )))
        .with(PageId::ASSET, Arc::new(AssetPage::new(host, assets, cache)))
        .with(PageId::NOT_FOUND, Arc::new(NotFoundPage))
}

/// Escape text for inclusion in markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
