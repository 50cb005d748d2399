//! itch.io trending extractor: listing cells from the new-and-popular page.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::Result;
use crate::fetch::fetch_text;
use crate::models::IndieListing;
use super::MAX_ITCH_CELLS;

const ITCH_TRENDING_URL: &str = "https://itch.io/games/new-and-popular";

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".game_cell").expect("Failed to parse cell selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".title").expect("Failed to parse title selector"));
static AUTHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".game_author").expect("Failed to parse author selector"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to parse anchor selector"));

pub async fn fetch_itch_trending() -> Result<Vec<IndieListing>> {
    let html = fetch_text(ITCH_TRENDING_URL).await?;
    Ok(parse_itch_trending(&html))
}

/// Walks listing cells, dropping any without a title. The url is the first
/// link into an itch.io content page; links back to the generic /games
/// listing don't count, and a cell may end up with an empty url.
pub fn parse_itch_trending(html: &str) -> Vec<IndieListing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for cell in document.select(&CELL_SELECTOR).take(MAX_ITCH_CELLS) {
        let title = cell
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }

        let author = cell
            .select(&AUTHOR_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let url = cell
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.contains("itch.io") && !href.contains("/games"))
            .unwrap_or_default()
            .to_string();

        listings.push(IndieListing { title, author, url });
    }

    debug!(kept = listings.len(), "parsed itch listing cells");
    listings
}
