// src/feed/images.rs
//! Fallback artwork for articles that arrive without an `image_url`.
//! Selection is positional so the same payload always renders the same
//! images: `pool[index_in_bucket % pool.len()]`.

pub const IMAGE_POOL: [&str; 4] = [
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1495020689067-958852a7765e?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?auto=format&fit=crop&w=800&q=80",
];

/// Deterministic fallback image for the article at `index_in_bucket`
/// (0-based position within its display bucket).
pub fn fallback_image(index_in_bucket: usize) -> &'static str {
    IMAGE_POOL[index_in_bucket % IMAGE_POOL.len()]
}
