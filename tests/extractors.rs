//! Fixture-driven tests for the extractor parse paths. No network: each
//! test feeds a captured-markup-shaped fixture straight to the parser.

use chrono::NaiveDate;
use indie_radar::models::ReleasedGame;
use indie_radar::sources::{itch, news, steam};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn steam_row(title: &str, released: &str, tooltip: Option<&str>) -> String {
    let review_span = match tooltip {
        Some(tooltip) => format!(
            r#"<span class="search_review_summary positive" data-tooltip-html="{}"></span>"#,
            tooltip
        ),
        None => String::new(),
    };
    format!(
        r#"<a class="search_result_row" href="https://store.example.com/app/123/{title}/?snr=1_7_7_230_150_1">
             <span class="title">{title}</span>
             <div class="search_released">{released}</div>
             {review_span}
           </a>"#,
        title = title,
        released = released,
        review_span = review_span,
    )
}

fn search_page(rows: &[String]) -> String {
    format!(
        "<html><body><div id=\"search_resultsRows\">{}</div></body></html>",
        rows.join("\n")
    )
}

#[test]
fn fresh_releases_filters_and_ranks() {
    let today = date(2026, 1, 20);
    let page = search_page(&[
        steam_row("Game A", "Jan 15, 2026", Some("Very Positive<br>92% of 1,204 reviews")),
        steam_row("Game B", "Jan 18, 2026", Some("Mostly Positive<br>74% of 310 reviews")),
        steam_row("Game C", "Coming soon", None),
        steam_row("Game D", "Jan 19, 2026", None),
        steam_row("Game E", "Dec 1, 2025", Some("Very Positive<br>98% of 50 reviews")),
        steam_row("Game F", "Jan 10, 2026", Some("Overwhelmingly Positive<br>97% of 9,001 reviews")),
    ]);

    let games = steam::parse_fresh_releases(&page, today);

    // 6 rows, 2 fail the recency filter
    assert_eq!(games.len(), 4);

    // descending by score, ties in upstream (recency) order
    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Game A", "Game F", "Game B", "Game D"]);

    assert_eq!(
        games[0],
        ReleasedGame {
            title: "Game A".to_string(),
            release: "Jan 15, 2026".to_string(),
            reviews: "Very Positive".to_string(),
            url: "https://store.example.com/app/123/Game A/".to_string(),
            score: 2,
        }
    );

    // rows without a review summary default to the storefront's New label
    assert_eq!(games[3].reviews, "New");
    assert_eq!(games[3].score, 0);
}

#[test]
fn fresh_releases_on_unrelated_markup_is_empty() {
    let games = steam::parse_fresh_releases("<html><body><p>maintenance</p></body></html>", date(2026, 1, 20));
    assert!(games.is_empty());
}

#[test]
fn upcoming_keeps_placeholder_and_future_year_rows() {
    let today = date(2025, 8, 25);
    let page = search_page(&[
        steam_row("Hype One", "Coming soon", None),
        steam_row("Released Already", "Jan 12, 2025", None),
        steam_row("No Date Yet", "", None),
        steam_row("Quarter Bound", "Q4 2025", None),
        steam_row("Next Year", "2026", None),
    ]);

    let games = steam::parse_upcoming_hype(&page, today);

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Hype One", "No Date Yet", "Quarter Bound", "Next Year"]);

    // empty release text defaults to TBA
    assert_eq!(games[1].release, "TBA");
}

#[test]
fn upcoming_is_truncated_to_twelve() {
    let rows: Vec<String> = (0..15)
        .map(|i| steam_row(&format!("Wishlist {}", i), "Coming soon", None))
        .collect();
    let games = steam::parse_upcoming_hype(&search_page(&rows), date(2025, 8, 25));
    assert_eq!(games.len(), 12);
    assert_eq!(games[0].title, "Wishlist 0");
}

#[test]
fn itch_cells_extract_title_author_and_content_link() {
    let page = r#"<html><body>
      <div class="game_cell">
        <a class="title game_link" href="https://okdev.itch.io/neon-dive?from=trending">Neon Dive</a>
        <div class="game_author"><a href="https://okdev.itch.io">okdev</a></div>
      </div>
      <div class="game_cell">
        <a class="title game_link" href="https://itch.io/games/new-and-popular">Orphan Link</a>
      </div>
      <div class="game_cell">
        <div class="game_author"><a href="https://ghost.itch.io">ghost</a></div>
      </div>
    </body></html>"#;

    let listings = itch::parse_itch_trending(page);

    // the cell with no title is dropped
    assert_eq!(listings.len(), 2);

    assert_eq!(listings[0].title, "Neon Dive");
    assert_eq!(listings[0].author, "okdev");
    assert_eq!(listings[0].url, "https://okdev.itch.io/neon-dive?from=trending");

    // only a /games listing link: no content url, author defaults
    assert_eq!(listings[1].title, "Orphan Link");
    assert_eq!(listings[1].author, "Unknown");
    assert_eq!(listings[1].url, "");
}

#[test]
fn news_entries_are_bounded_and_defaulted() {
    let long_title = "B".repeat(120);
    let mut items_xml = format!(
        "<item><title>{}</title><link>https://example.com/long</link></item>",
        long_title
    );
    for i in 0..12 {
        items_xml.push_str(&format!(
            "<item><title>Story {i}</title><link>https://example.com/{i}</link></item>"
        ));
    }
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
           <rss version="2.0"><channel><title>search</title>{}</channel></rss>"#,
        items_xml
    );

    let items = news::parse_news_buzz(&xml).unwrap();

    // 13 entries in the feed, capped at 10
    assert_eq!(items.len(), 10);

    // headline capped at 80 characters
    assert_eq!(items[0].title.chars().count(), 80);
    assert_eq!(items[0].url, "https://example.com/long");

    // no source element in the feed: generic label
    assert!(items.iter().all(|item| item.source == "News"));
}

#[test]
fn news_attributed_sources_come_through() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
      <rss version="2.0"><channel><title>search</title>
        <item>
          <title>Indie hit breaks records</title>
          <link>https://example.com/hit</link>
          <source url="https://www.theverge.com">The Verge</source>
        </item>
        <item>
          <title>Unattributed story</title>
          <link>https://example.com/other</link>
        </item>
      </channel></rss>"#;

    let items = news::parse_news_buzz(xml).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].source, "The Verge");
    assert_eq!(items[0].url, "https://example.com/hit");
    assert_eq!(items[1].source, "News");
}

#[test]
fn news_rejects_non_feed_bodies() {
    assert!(news::parse_news_buzz("<html><body>blocked</body></html>").is_err());
}
