// src/api.rs
use std::sync::Arc;

use shuttle_axum::axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use crate::feed;
use crate::feed::types::FrontPage;
use crate::source::ArticleSource;

/// Error indicator shown by the page shell when the payload fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Could not load the latest articles. Please try again later.";

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn ArticleSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/front-page", get(front_page))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
struct FrontPageResp {
    #[serde(flatten)]
    page: FrontPage,
    error: Option<String>,
}

/// Fetch the payload once and compose the page. A failed fetch degrades to
/// the empty three-bucket page with an in-band error indicator; the shell
/// renders its fallback rather than an HTTP error path.
async fn front_page(State(state): State<AppState>) -> Json<FrontPageResp> {
    match state.source.fetch_latest().await {
        Ok(payload) => Json(FrontPageResp {
            page: feed::compose(&payload),
            error: None,
        }),
        Err(e) => {
            tracing::warn!(error = ?e, source = state.source.name(), "front-page payload fetch failed");
            feed::ensure_metrics_described();
            metrics::counter!("feed_fetch_errors_total").increment(1);
            Json(FrontPageResp {
                page: FrontPage::default(),
                error: Some(FETCH_ERROR_MESSAGE.to_string()),
            })
        }
    }
}
