// src/feed/types.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Article identifier as the upstream service sends it: some feeds use
/// numeric ids, others slugs. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Num(i64),
    Text(String),
}

impl Default for ArticleId {
    fn default() -> Self {
        ArticleId::Num(0)
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleId::Num(n) => write!(f, "{n}"),
            ArticleId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One article record as delivered by the article-data service. Field names
/// vary across payload revisions (`headline` vs `title`, `blurb` vs
/// `summary`), and any field may be missing; composition degrades to
/// defaults instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    pub id: ArticleId,
    #[serde(alias = "title")]
    pub headline: Option<String>,
    #[serde(alias = "summary")]
    pub blurb: Option<String>,
    pub subheader: Option<String>,
    pub ticker: Option<String>,
    pub score: Option<f64>,
    pub image_url: Option<String>,
}

/// The raw payload from `GET /api/articles`: a flat article list plus an
/// optional named grouping map. Only the group names feed the category
/// strip; the id lists are accepted but not consumed downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedPayload {
    pub articles: Vec<RawArticle>,
    pub groups: Option<BTreeMap<String, Vec<ArticleId>>>,
}

/// Display-ready article: every field the page renders is guaranteed
/// present, with placeholders filled in where the payload was silent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub subheader: Option<String>,
    pub ticker: Option<String>,
    pub score: f64,
    pub author: String,
    pub datetime: String,
    pub image: String,
    /// Reserved for per-article category tagging; always empty for now.
    pub category: String,
}

/// The composed front page: three rank-ordered display buckets plus the
/// category strip. Serialized camelCase for the page shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontPage {
    pub top_headlines: Vec<NormalizedArticle>,
    pub latest_news: Vec<NormalizedArticle>,
    pub trending: Vec<NormalizedArticle>,
    pub categories: Vec<String>,
}
