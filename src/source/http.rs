// src/source/http.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::AppConfig;
use crate::feed::types::FeedPayload;
use crate::source::ArticleSource;

/// HTTP client for the article-data service. Fetches
/// `{api_base_url}/api/articles` once per front-page request; non-2xx and
/// transport failures surface as errors for the caller's empty-page
/// fallback.
pub struct HttpArticleSource {
    client: Client,
    base_url: String,
}

impl HttpArticleSource {
    pub fn new(cfg: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("building article service client")?;
        Ok(Self {
            client,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
    async fn fetch_latest(&self) -> Result<FeedPayload> {
        let url = format!("{}/api/articles", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("fetching {url}"))?;
        let resp = resp
            .error_for_status()
            .context("article service returned an error status")?;
        let payload = resp
            .json::<FeedPayload>()
            .await
            .context("decoding article payload")?;
        Ok(payload)
    }

    fn name(&self) -> &'static str {
        "ArticleService"
    }
}
