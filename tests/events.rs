//! Delegated event handling: link interception, the dispatcher loop and
//! hover prefetch.

use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

use spa_router::events::{Anchor, ClickEvent, HostEvent, HoverEvent};
use spa_router::page::PageId;
use spa_router::pages::{Asset, AssetError, AssetPage, AssetSource};
use spa_router::prefetch::{PrefetchCache, PrefetchKey};
use spa_router::Shutdown;

mod common;

use common::{memory_host, wait_until, within, Harness, ScriptedPage};

/// Serves one fixed asset and counts requests.
#[derive(Default)]
struct CountingAssets {
    fetches: AtomicUsize,
}

impl CountingAssets {
    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl AssetSource for CountingAssets {
    fn fetch(&self, username: &str, slug: &str) -> BoxFuture<'static, Result<Asset, AssetError>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let found = username == "alice" && slug == "oak";
        async move {
            if !found {
                return Err(AssetError::NotFound);
            }
            Ok(Asset {
                title: Some("Oak".into()),
                asset_data: Some("NODES:oak".into()),
                author: Some("alice".into()),
                description: None,
            })
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_clicks_left_to_the_browser() {
    let terms = Arc::new(ScriptedPage::new("terms"));
    let host = memory_host();
    let navigator = Harness::new().page("terms", terms.clone()).build(host.clone());
    let dispatcher = navigator.dispatcher();

    let ignored = [
        ClickEvent::default(),
        ClickEvent::on(Anchor::default()),
        ClickEvent::on(Anchor::new("/terms").with_target("_blank")),
        ClickEvent::on(Anchor::new("https://github.com/tree-clipper")),
        ClickEvent::on(Anchor::new("mailto:hello@example.com")),
        ClickEvent::on(Anchor::new("//cdn.example.com/app.js")),
        ClickEvent::on(Anchor::new("/terms").with_download()),
        ClickEvent::on(Anchor::new("#section")),
    ];
    for click in ignored {
        assert!(dispatcher.dispatch(HostEvent::Click(click)).is_none());
    }

    assert_eq!(host.snapshot().pushes, 0);
    assert_eq!(terms.init_count(), 0);
}

#[tokio::test]
async fn test_in_app_click_navigates() {
    let terms = Arc::new(ScriptedPage::new("terms"));
    let host = memory_host();
    let navigator = Harness::new().page("terms", terms.clone()).build(host.clone());
    let dispatcher = navigator.dispatcher();

    let click = ClickEvent::on(Anchor::new("/terms").with_target("_self"));
    within(dispatcher.dispatch(HostEvent::Click(click)).unwrap())
        .await
        .unwrap();

    let snapshot = host.snapshot();
    assert_eq!(snapshot.location, "/terms");
    assert_eq!(snapshot.pushes, 1);
    assert_eq!(snapshot.container.as_deref(), Some(terms.markup()));
}

#[tokio::test]
async fn test_run_loop_until_shutdown() {
    let terms = Arc::new(ScriptedPage::new("terms"));
    let host = memory_host();
    let navigator = Harness::new().page("terms", terms.clone()).build(host.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let shutdown = Shutdown::new();
    let running = tokio::spawn(navigator.dispatcher().run(rx, shutdown.subscribe()));

    tx.send(HostEvent::Click(ClickEvent::on(Anchor::new("/terms"))))
        .unwrap();
    wait_until(|| host.container().as_deref() == Some(terms.markup())).await;

    shutdown.trigger();
    within(running).await.unwrap();
    assert_eq!(shutdown.receiver_count(), 0);
}

#[tokio::test]
async fn test_run_loop_ends_when_channel_closes() {
    let host = memory_host();
    let navigator = Harness::new().build(host);
    let shutdown = Shutdown::new();

    let (tx, rx) = mpsc::unbounded_channel::<HostEvent>();
    drop(tx);
    within(navigator.dispatcher().run(rx, shutdown.subscribe())).await;
}

#[tokio::test]
async fn test_hover_prefetch_is_consumed_by_navigation() {
    let assets = Arc::new(CountingAssets::default());
    let cache = Arc::new(PrefetchCache::new());
    let host = memory_host();
    let page = AssetPage::new(host.clone(), assets.clone(), cache.clone());
    let navigator = Harness::new()
        .module(PageId::ASSET, Arc::new(page))
        .build(host.clone());
    let dispatcher = navigator.dispatcher();
    let key = PrefetchKey::new("alice", "oak");

    let hover = HoverEvent::on(Anchor::new("/alice/oak"));
    within(dispatcher.dispatch(HostEvent::Hover(hover)).unwrap())
        .await
        .unwrap();
    assert_eq!(assets.fetches(), 1);
    assert!(cache.contains(&key));

    // hovering again while the entry is unconsumed starts nothing new
    let hover = HoverEvent::on(Anchor::new("/alice/oak"));
    within(dispatcher.dispatch(HostEvent::Hover(hover)).unwrap())
        .await
        .unwrap();
    assert_eq!(assets.fetches(), 1);

    navigator.navigate("/alice/oak").await;
    wait_until(|| host.element("asset-title").as_deref() == Some("Oak")).await;

    assert_eq!(assets.fetches(), 1);
    assert!(cache.is_empty());
    assert_eq!(host.element("asset-data").as_deref(), Some("NODES:oak"));
    assert!(host.element("asset-meta").unwrap().contains("@alice"));
}

#[tokio::test]
async fn test_asset_page_without_prefetch_fetches_directly() {
    let assets = Arc::new(CountingAssets::default());
    let cache = Arc::new(PrefetchCache::new());
    let host = memory_host();
    let page = AssetPage::new(host.clone(), assets.clone(), cache.clone());
    let navigator = Harness::new()
        .module(PageId::ASSET, Arc::new(page))
        .build(host.clone());

    navigator.navigate("/bob/pine").await;
    wait_until(|| host.element("asset-title").as_deref() == Some("Asset Not Found")).await;
    assert_eq!(assets.fetches(), 1);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_hover_ignored_when_prefetch_disabled() {
    let host = memory_host();
    let mut harness = Harness::new();
    harness.config.prefetch.enabled = false;
    let navigator = harness.build(host);

    let hover = HoverEvent::on(Anchor::new("/alice/oak"));
    assert!(navigator.dispatcher().dispatch(HostEvent::Hover(hover)).is_none());
}
