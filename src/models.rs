use serde::Serialize;
use chrono::{DateTime, Utc};

/// A recently released game from the storefront search, scored by review
/// sentiment (2 = very/overwhelmingly positive, 1 = positive, 0 = other).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReleasedGame {
    pub title: String,
    pub release: String,
    pub reviews: String,
    pub url: String,
    pub score: u8,
}

/// An unreleased game from the most-wishlisted listing. No score; list
/// order preserves the upstream popularity rank.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpcomingGame {
    pub title: String,
    pub release: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndieListing {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Joined output of one aggregation run. This is the wire format of the
/// /api/games endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub generated: DateTime<Utc>,
    #[serde(rename = "freshReleases")]
    pub fresh_releases: Vec<ReleasedGame>,
    pub upcoming: Vec<UpcomingGame>,
    pub news: Vec<NewsItem>,
    pub itch: Vec<IndieListing>,
    pub cached: bool,
}
