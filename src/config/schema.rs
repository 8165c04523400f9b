//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the navigator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the navigation engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Id of the persistent element pages are rendered into.
    pub container_id: String,

    /// Markup shown in the container when a navigation fails.
    pub error_markup: String,

    /// Page id substituted for modules that fail to load.
    pub not_found_page: String,

    /// Static route table. Order is precedence.
    pub routes: Vec<RouteConfig>,

    /// Hover prefetch settings.
    pub prefetch: PrefetchConfig,

    /// Backend API used by data-driven pages.
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            container_id: "spa-content".to_string(),
            error_markup: "<h1>Error</h1><p>Failed to load page.</p>".to_string(),
            not_found_page: "404".to_string(),
            routes: default_routes(),
            prefetch: PrefetchConfig::default(),
            api: ApiConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single exact-path route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Exact path to match, including any `.html` suffix.
    pub path: String,

    /// Page id the path resolves to.
    pub page: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page: page.into(),
        }
    }
}

/// Every page is reachable both with and without the `.html` suffix.
fn default_routes() -> Vec<RouteConfig> {
    [
        ("/", "home"),
        ("/index.html", "home"),
        ("/login", "login"),
        ("/login.html", "login"),
        ("/my-assets", "my-assets"),
        ("/my-assets.html", "my-assets"),
        ("/upload-asset", "upload"),
        ("/upload-asset.html", "upload"),
        ("/settings", "settings"),
        ("/settings.html", "settings"),
        ("/claim-username", "claim-username"),
        ("/claim-username.html", "claim-username"),
        ("/terms", "terms"),
        ("/terms.html", "terms"),
        ("/imprint", "imprint"),
        ("/imprint.html", "imprint"),
    ]
    .into_iter()
    .map(|(path, page)| RouteConfig::new(path, page))
    .collect()
}

/// Hover prefetch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PrefetchConfig {
    /// Start page data fetches when the pointer rests on an in-app link.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8787".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
