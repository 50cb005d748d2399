//! News buzz extractor: a Google News RSS search for trending-indie terms.

use feed_rs::parser;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::fetch::fetch_text;
use crate::models::NewsItem;
use super::{MAX_NEWS_ITEMS, MAX_NEWS_TITLE_CHARS};

const NEWS_FEED_URL: &str =
    "https://news.google.com/rss/search?q=indie+game+viral+OR+trending+OR+%22new+indie%22&hl=en-US&gl=US&ceid=US:en";

pub async fn fetch_news_buzz() -> Result<Vec<NewsItem>> {
    let xml = fetch_text(NEWS_FEED_URL).await?;
    parse_news_buzz(&xml)
}

/// Takes the leading feed entries, bounding the headline length. Entries
/// without an attributed source fall back to a generic "News" label.
pub fn parse_news_buzz(xml: &str) -> Result<Vec<NewsItem>> {
    let feed = parser::parse(xml.as_bytes())
        .map_err(|e| AppError::ParseError(format!("Failed to parse news feed: {}", e)))?;

    let source_names = item_source_names(xml);

    let items: Vec<NewsItem> = feed
        .entries
        .into_iter()
        .enumerate()
        .take(MAX_NEWS_ITEMS)
        .map(|(idx, entry)| {
            let title = entry
                .title
                .map(|t| truncate_chars(t.content.trim(), MAX_NEWS_TITLE_CHARS))
                .unwrap_or_default();
            let url = entry
                .links
                .first()
                .map(|link| link.href.trim().to_string())
                .unwrap_or_default();
            let source = source_names
                .get(idx)
                .cloned()
                .flatten()
                .unwrap_or_else(|| "News".to_string());

            NewsItem { title, source, url }
        })
        .collect();

    debug!(kept = items.len(), "parsed news feed entries");
    Ok(items)
}

/// Text of each item's RSS `<source>` element, in document order, `None`
/// where an item carries no attribution. feed-rs does not surface the
/// element's text, so a second lightweight pass collects it.
fn item_source_names(xml: &str) -> Vec<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();
    let mut in_source = false;
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => match start.name().as_ref() {
                b"item" => current = None,
                b"source" => in_source = true,
                _ => {}
            },
            Ok(Event::Text(text)) if in_source => {
                if let Ok(value) = text.unescape() {
                    let value = value.trim().to_string();
                    if !value.is_empty() {
                        current = Some(value);
                    }
                }
            }
            Ok(Event::End(end)) => match end.name().as_ref() {
                b"source" => in_source = false,
                b"item" => names.push(current.take()),
                _ => {}
            },
            Ok(Event::Eof) => break,
            // A malformed tail should not cost us the names already seen
            Err(_) => break,
            _ => {}
        }
    }

    names
}

/// Char-boundary-safe prefix of at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
