// src/source/mod.rs
pub mod http;

use anyhow::{Context, Result};

use crate::feed::types::FeedPayload;

/// Where the raw article payload comes from. One implementation talks to the
/// article-data service over HTTP; tests substitute a fixture.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    /// One-shot fetch of the current payload. No retry on failure; the
    /// caller falls back to an empty page. Dropping the pending future
    /// abandons the fetch, so a consumer that goes away before completion
    /// never observes the result.
    async fn fetch_latest(&self) -> Result<FeedPayload>;
    fn name(&self) -> &'static str;
}

/// Fixture-backed source that parses a canned JSON payload.
pub struct FixtureSource {
    pub json_content: String,
}

impl FixtureSource {
    pub fn from_fixture(content: &str) -> Self {
        Self {
            json_content: content.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ArticleSource for FixtureSource {
    async fn fetch_latest(&self) -> Result<FeedPayload> {
        let payload: FeedPayload =
            serde_json::from_str(&self.json_content).context("parsing article fixture json")?;
        Ok(payload)
    }

    fn name(&self) -> &'static str {
        "Fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::ArticleId;

    #[tokio::test]
    async fn fixture_parses_mixed_id_types() {
        let src = FixtureSource::from_fixture(
            r#"{
                "articles": [
                    { "id": 7, "headline": "A", "score": 1.5 },
                    { "id": "fed-holds", "title": "B", "summary": "text" }
                ]
            }"#,
        );
        let p = src.fetch_latest().await.unwrap();
        assert_eq!(p.articles.len(), 2);
        assert_eq!(p.articles[0].id, ArticleId::Num(7));
        assert_eq!(p.articles[1].id, ArticleId::Text("fed-holds".into()));
        // alias fields land in the canonical slots
        assert_eq!(p.articles[1].headline.as_deref(), Some("B"));
        assert_eq!(p.articles[1].blurb.as_deref(), Some("text"));
    }

    #[tokio::test]
    async fn fixture_rejects_invalid_json() {
        let src = FixtureSource::from_fixture("not json");
        assert!(src.fetch_latest().await.is_err());
    }
}
