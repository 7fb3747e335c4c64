//! Front-Page Feed Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polynews_feed::api::{self, AppState};
use polynews_feed::config::AppConfig;
use polynews_feed::metrics::Metrics;
use polynews_feed::source::http::HttpArticleSource;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - NEWSFEED_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("NEWSFEED_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("polynews_feed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables NEWSFEED_API_BASE_URL / NEWSFEED_CONFIG_PATH from .env.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    enable_dev_tracing();

    // Resolve configuration once; everything downstream takes it by value.
    let cfg = AppConfig::load_default().expect("Failed to load feed config");
    let source = HttpArticleSource::new(&cfg).expect("Failed to build article service client");

    // Prometheus exposition on /metrics alongside the page routes.
    let metrics = Metrics::init();

    let state = AppState::new(Arc::new(source));
    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
