// tests/metrics_feed.rs
//
// The fetch-error counter must be described even when the very first request
// fails before any successful composition, so /metrics carries its HELP line.
// Lives in its own test binary: the Prometheus recorder installs once per
// process.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shuttle_axum::axum::{
    body::{self, Body},
    http::Request,
};
use tower::ServiceExt as _; // for `oneshot`

use polynews_feed::api::{self, AppState};
use polynews_feed::feed::types::FeedPayload;
use polynews_feed::metrics::Metrics;
use polynews_feed::source::ArticleSource;

struct FailingSource;

#[async_trait]
impl ArticleSource for FailingSource {
    async fn fetch_latest(&self) -> Result<FeedPayload> {
        Err(anyhow!("connection refused"))
    }
    fn name(&self) -> &'static str {
        "FailingSource"
    }
}

#[tokio::test]
async fn fetch_error_counter_is_described_before_first_compose() {
    let metrics = Metrics::init();
    let app = api::router(AppState::new(Arc::new(FailingSource)));

    let req = Request::builder()
        .method("GET")
        .uri("/api/front-page")
        .body(Body::empty())
        .expect("build GET /api/front-page");
    let resp = app.oneshot(req).await.expect("oneshot /api/front-page");
    assert!(resp.status().is_success());
    let _ = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");

    let rendered = metrics.handle.render();
    assert!(
        rendered.contains("feed_fetch_errors_total"),
        "fetch-error counter missing from exposition:\n{rendered}"
    );
    assert!(
        rendered.contains("# HELP feed_fetch_errors_total"),
        "fetch-error counter description missing:\n{rendered}"
    );
}
