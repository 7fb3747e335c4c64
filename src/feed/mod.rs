// src/feed/mod.rs
//! Front-page composition: rank the raw article payload by score and
//! partition it into the three display buckets the page renders.

pub mod images;
pub mod text;
pub mod types;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;

use crate::feed::text::clean_text;
use crate::feed::types::{FeedPayload, FrontPage, NormalizedArticle, RawArticle};

/// Byline placeholder when the payload carries no author.
pub const DEFAULT_AUTHOR: &str = "Ginny Dennis";
/// Timestamp placeholder when the payload carries no publish time.
pub const DEFAULT_DATETIME: &str = "Just now";
const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_SUMMARY: &str = "No summary available.";

/// Bucket boundaries over the rank-ordered sequence.
const TOP_HEADLINES: std::ops::Range<usize> = 0..4;
const LATEST_NEWS: std::ops::Range<usize> = 4..8;
const TRENDING: std::ops::Range<usize> = 8..12;

/// One-time metrics registration (so series show up on /metrics). Also
/// called from the fetch-error path, which can run before any composition.
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_compose_total", "Front-page compositions performed.");
        describe_counter!(
            "feed_articles_in_total",
            "Raw articles received across all compositions."
        );
        describe_counter!(
            "feed_fetch_errors_total",
            "Upstream payload fetches that failed."
        );
        describe_gauge!(
            "feed_last_compose_ts",
            "Unix ts when the front page was last composed."
        );
    });
}

/// Compose the front page from a raw payload.
///
/// Rank order is descending score with a stable tie-break: articles with
/// equal scores keep their relative order from the payload (`sort_by` is a
/// stable sort). A missing score ranks as 0.0. Never fails; malformed
/// records degrade to placeholder fields.
pub fn compose(payload: &FeedPayload) -> FrontPage {
    ensure_metrics_described();

    let categories: Vec<String> = payload
        .groups
        .as_ref()
        .map(|g| g.keys().cloned().collect())
        .unwrap_or_default();

    let mut ranked: Vec<&RawArticle> = payload.articles.iter().collect();
    ranked.sort_by(|a, b| rank_score(b).total_cmp(&rank_score(a)));

    let page = FrontPage {
        top_headlines: bucket(&ranked, TOP_HEADLINES),
        latest_news: bucket(&ranked, LATEST_NEWS),
        trending: bucket(&ranked, TRENDING),
        categories,
    };

    counter!("feed_compose_total").increment(1);
    counter!("feed_articles_in_total").increment(payload.articles.len() as u64);
    gauge!("feed_last_compose_ts").set(now_unix() as f64);

    page
}

fn rank_score(a: &RawArticle) -> f64 {
    a.score.unwrap_or(0.0)
}

/// Slice one positional window out of the ranked sequence and normalize it.
/// Windows past the end of a short payload come back empty.
fn bucket(ranked: &[&RawArticle], window: std::ops::Range<usize>) -> Vec<NormalizedArticle> {
    let lo = window.start.min(ranked.len());
    let hi = window.end.min(ranked.len());
    ranked[lo..hi]
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize(raw, i))
        .collect()
}

/// Fill in the fixed display shape for one article. `index_in_bucket` is the
/// article's 0-based position within its bucket slice and keys the fallback
/// image selection.
pub fn normalize(raw: &RawArticle, index_in_bucket: usize) -> NormalizedArticle {
    let title = non_empty_or(
        clean_text(raw.headline.as_deref().unwrap_or_default()),
        DEFAULT_TITLE,
    );
    let summary = non_empty_or(
        clean_text(raw.blurb.as_deref().unwrap_or_default()),
        DEFAULT_SUMMARY,
    );

    let image = raw
        .image_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| images::fallback_image(index_in_bucket).to_string());

    NormalizedArticle {
        id: raw.id.clone(),
        title,
        summary,
        subheader: raw.subheader.clone(),
        ticker: raw.ticker.clone(),
        score: rank_score(raw),
        author: DEFAULT_AUTHOR.to_string(),
        datetime: DEFAULT_DATETIME.to_string(),
        image,
        category: String::new(),
    }
}

fn non_empty_or(s: String, fallback: &str) -> String {
    if s.is_empty() {
        fallback.to_string()
    } else {
        s
    }
}

fn now_unix() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
