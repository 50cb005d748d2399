//! Steam search extractors: fresh indie releases and most-wishlisted
//! upcoming titles. Both walk `a.search_result_row` rows of a search
//! results page.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::classify::{is_recent_release, is_upcoming_release, sentiment_score};
use crate::error::Result;
use crate::fetch::fetch_text;
use crate::models::{ReleasedGame, UpcomingGame};
use super::{MAX_RELEASE_ROWS, MAX_UPCOMING_KEPT, MAX_UPCOMING_ROWS};

// Indie tag, games category, sorted by release date descending.
const FRESH_RELEASES_URL: &str =
    "https://store.steampowered.com/search/?sort_by=Released_DESC&tags=492&category1=998&ndl=1";

// Indie tag, games category, ranked by wishlist popularity.
const UPCOMING_HYPE_URL: &str =
    "https://store.steampowered.com/search/?filter=popularwishlist&tags=492&category1=998";

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.search_result_row").expect("Failed to parse row selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".title").expect("Failed to parse title selector"));
static RELEASED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".search_released").expect("Failed to parse released selector"));
static REVIEW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".search_review_summary").expect("Failed to parse review selector")
});

pub async fn fetch_fresh_releases(today: NaiveDate) -> Result<Vec<ReleasedGame>> {
    let html = fetch_text(FRESH_RELEASES_URL).await?;
    Ok(parse_fresh_releases(&html, today))
}

pub async fn fetch_upcoming_hype(today: NaiveDate) -> Result<Vec<UpcomingGame>> {
    let html = fetch_text(UPCOMING_HYPE_URL).await?;
    Ok(parse_upcoming_hype(&html, today))
}

/// Walks recency-sorted search rows, keeps those released within the
/// recency window and ranks them by review sentiment. The sort is stable,
/// so ties keep the upstream recency order.
pub fn parse_fresh_releases(html: &str, today: NaiveDate) -> Vec<ReleasedGame> {
    let document = Html::parse_document(html);
    let mut games = Vec::new();

    for row in document.select(&ROW_SELECTOR).take(MAX_RELEASE_ROWS) {
        let title = select_text(&row, &TITLE_SELECTOR);
        let release = select_text(&row, &RELEASED_SELECTOR);

        if !is_recent_release(&release, today) {
            continue;
        }

        let reviews = review_summary(&row);
        let url = detail_url(&row);
        let score = sentiment_score(&reviews);

        games.push(ReleasedGame { title, release, reviews, url, score });
    }

    debug!(kept = games.len(), "parsed fresh release rows");
    games.sort_by(|a, b| b.score.cmp(&a.score));
    games
}

/// Walks wishlist-ranked rows and keeps those whose release text reads as
/// unreleased, preserving the popularity order.
pub fn parse_upcoming_hype(html: &str, today: NaiveDate) -> Vec<UpcomingGame> {
    let document = Html::parse_document(html);
    let mut games = Vec::new();

    for row in document.select(&ROW_SELECTOR).take(MAX_UPCOMING_ROWS) {
        let title = select_text(&row, &TITLE_SELECTOR);
        let mut release = select_text(&row, &RELEASED_SELECTOR);
        if release.is_empty() {
            release = "TBA".to_string();
        }

        if !is_upcoming_release(&release, today) {
            continue;
        }

        let url = detail_url(&row);
        games.push(UpcomingGame { title, release, url });
        if games.len() == MAX_UPCOMING_KEPT {
            break;
        }
    }

    debug!(kept = games.len(), "parsed upcoming hype rows");
    games
}

fn select_text(row: &ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// First segment of the review tooltip, e.g. "Very Positive" out of
/// "Very Positive<br>92% of 1,234 reviews...". Rows without reviews yet
/// get the storefront's "New" label.
fn review_summary(row: &ElementRef) -> String {
    row.select(&REVIEW_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("data-tooltip-html"))
        .and_then(|tooltip| tooltip.split("<br>").next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("New")
        .to_string()
}

/// Row href with the query string (tracking snr etc.) stripped.
fn detail_url(row: &ElementRef) -> String {
    row.value()
        .attr("href")
        .and_then(|href| href.split('?').next())
        .unwrap_or_default()
        .to_string()
}
