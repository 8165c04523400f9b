//! Asset detail page.
//!
//! The page renders a skeleton immediately and fills it in once the
//! asset arrives. Data comes from the prefetch cache when a hover has
//! already started the fetch, otherwise straight from the API.

use futures_util::future::{BoxFuture, FutureExt};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::host::Host;
use crate::page::{InitFuture, PageError, PageModule, RouteParams, Teardown};
use crate::pages::escape_html;
use crate::prefetch::{PrefetchCache, PrefetchKey};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment.
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Asset record as served by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub title: Option<String>,
    pub asset_data: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

/// Errors that can occur while fetching an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Where asset records come from.
pub trait AssetSource: Send + Sync {
    fn fetch(&self, username: &str, slug: &str) -> BoxFuture<'static, Result<Asset, AssetError>>;
}

/// Fetches assets from `{base_url}/api/asset/{username}/{slug}`.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetSource {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn asset_url(&self, username: &str, slug: &str) -> String {
        format!(
            "{}/api/asset/{}/{}",
            self.base_url,
            encode_component(username),
            encode_component(slug)
        )
    }
}

impl AssetSource for HttpAssetSource {
    fn fetch(&self, username: &str, slug: &str) -> BoxFuture<'static, Result<Asset, AssetError>> {
        let client = self.client.clone();
        let url = self.asset_url(username, slug);
        async move {
            let res = client.get(&url).send().await?;
            let status = res.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(AssetError::NotFound);
            }
            if !status.is_success() {
                return Err(AssetError::Status(status.as_u16()));
            }
            Ok(res.json::<Asset>().await?)
        }
        .boxed()
    }
}

/// The `/:username/:slug` page.
#[derive(Clone)]
pub struct AssetPage {
    host: Arc<dyn Host>,
    source: Arc<dyn AssetSource>,
    cache: Arc<PrefetchCache<Asset>>,
}

impl AssetPage {
    pub fn new(
        host: Arc<dyn Host>,
        source: Arc<dyn AssetSource>,
        cache: Arc<PrefetchCache<Asset>>,
    ) -> Self {
        Self { host, source, cache }
    }

    async fn load(self, username: Option<String>, slug: Option<String>) {
        let (Some(username), Some(slug)) = (username, slug) else {
            self.host.set_element_text("asset-title", "No Asset");
            self.host
                .set_element_text("asset-data", "Please provide an asset in the URL");
            return;
        };

        let key = PrefetchKey::new(&username, &slug);
        let result = self
            .cache
            .take_or_fetch(&key, || self.source.fetch(&username, &slug))
            .await;

        match result {
            Ok(asset) => self.show(&asset),
            Err(AssetError::NotFound) => {
                self.host.set_element_text("asset-title", "Asset Not Found");
                self.host
                    .set_element_text("asset-data", "The requested asset does not exist");
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to load asset");
                self.host.set_element_text("asset-title", "Error");
                self.host
                    .set_element_text("asset-data", &format!("Failed to load: {e}"));
            }
        }
    }

    fn show(&self, asset: &Asset) {
        self.host.set_title(&format!(
            "{} - Tree Clipper",
            asset.title.as_deref().unwrap_or("Asset")
        ));
        self.host.set_element_text(
            "asset-title",
            asset.title.as_deref().unwrap_or("Untitled Asset"),
        );
        self.host.set_element_text(
            "asset-data",
            asset.asset_data.as_deref().unwrap_or("No data available"),
        );

        let author = asset.author.as_deref().unwrap_or("Unknown");
        let mut meta = format!(
            r#"by <a href="/{}" class="author-link"><strong>@{}</strong></a>"#,
            encode_component(author),
            escape_html(author)
        );
        if let Some(description) = asset.description.as_deref().filter(|d| !d.is_empty()) {
            meta.push_str(&format!(
                r#"<br><span class="asset-description">{}</span>"#,
                escape_html(description)
            ));
        }
        self.host.set_element_html("asset-meta", &meta);
    }
}

impl PageModule for AssetPage {
    fn title(&self, _params: &RouteParams) -> Option<String> {
        Some("Asset - Tree Clipper".to_string())
    }

    fn template(&self, _params: &RouteParams) -> Result<Option<String>, PageError> {
        Ok(Some(
            r#"<a href="/" class="back-button">←</a>
<h1><span id="asset-title">&nbsp;</span></h1>
<div class="copy-asset">
  <p>Asset data:</p>
  <pre id="asset-data">Loading...</pre>
  <button id="copy-button" class="copy-button">Copy</button>
</div>
<div id="asset-meta" class="asset-meta"></div>"#
                .to_string(),
        ))
    }

    fn init(&self, params: &RouteParams) -> Option<InitFuture> {
        let page = self.clone();
        let username = params.get("username").cloned();
        let slug = params.get("slug").cloned();

        Some(
            async move {
                // render progressively; init returns before the data arrives
                let task = tokio::spawn(page.load(username, slug));
                Ok(Some(Teardown::new(move || task.abort())))
            }
            .boxed(),
        )
    }

    fn prefetch(&self, params: &RouteParams) {
        let (Some(username), Some(slug)) = (params.get("username"), params.get("slug")) else {
            return;
        };
        self.cache.schedule(PrefetchKey::new(username, slug), || {
            self.source.fetch(username, slug)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("my tree"), "my%20tree");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("it's-ok_(1)~"), "it's-ok_(1)~");
    }

    #[test]
    fn test_asset_url() {
        let source = HttpAssetSource::new(&ApiConfig {
            base_url: "https://example.com/".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(
            source.asset_url("jürgen", "big tree"),
            "https://example.com/api/asset/j%C3%BCrgen/big%20tree"
        );
    }

    #[test]
    fn test_asset_deserializes_with_missing_fields() {
        let asset: Asset = serde_json::from_str(r#"{"title":"Oak","extra":1}"#).unwrap();
        assert_eq!(asset.title.as_deref(), Some("Oak"));
        assert!(asset.author.is_none());
    }
}
