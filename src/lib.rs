// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod feed;
pub mod forms;
pub mod metrics;
pub mod source;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::feed::compose;
pub use crate::feed::types::{ArticleId, FeedPayload, FrontPage, NormalizedArticle, RawArticle};
