//! Per-source extractors. Each issues one upstream request and parses the
//! body into typed items; parsing lives in pure functions so fixture tests
//! can run without the network.
//!
//! Candidate-node caps bound worst-case latency and payload size no matter
//! how large an upstream page grows.

pub mod steam;
pub mod news;
pub mod itch;

/// Storefront search rows scanned for fresh releases.
pub const MAX_RELEASE_ROWS: usize = 60;
/// Wishlist rows scanned for upcoming titles.
pub const MAX_UPCOMING_ROWS: usize = 20;
/// Upcoming titles kept after filtering.
pub const MAX_UPCOMING_KEPT: usize = 12;
/// Leading feed entries kept.
pub const MAX_NEWS_ITEMS: usize = 10;
/// News headline length cap, in characters.
pub const MAX_NEWS_TITLE_CHARS: usize = 80;
/// Listing cells scanned on the trending page.
pub const MAX_ITCH_CELLS: usize = 10;
