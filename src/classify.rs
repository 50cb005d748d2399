//! Pure text classifiers used to filter and rank extractor output.
//!
//! All functions take the current date explicitly so tests can pin "now".
//! Release dates carry no timezone upstream; they are interpreted as UTC
//! calendar days.

use chrono::NaiveDate;

/// Placeholder tokens that mark a release text as not-yet-released.
const PLACEHOLDER_WORDS: [&str; 9] = [
    "coming", "tba", "to be", "announced", "soon", "q1", "q2", "q3", "q4",
];

/// Date layouts the storefront uses, e.g. "Jan 15, 2026" and "15 Jan, 2026".
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%d %b, %Y"];

/// Whether a raw release text names a date within the last 30 days.
///
/// Placeholder texts ("Coming soon", "TBA", "Q3 2026", ...) and anything
/// that fails to parse are not recent. Future dates are not recent either.
pub fn is_recent_release(release_text: &str, today: NaiveDate) -> bool {
    let trimmed = release_text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let lowered = trimmed.to_lowercase();
    if PLACEHOLDER_WORDS.iter().any(|w| lowered.contains(w)) {
        return false;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            let elapsed = (today - date).num_days();
            return (0..=30).contains(&elapsed);
        }
    }

    false
}

/// Whether a release text reads as an unreleased title: it carries a
/// placeholder token or a year strictly beyond the current one.
pub fn is_upcoming_release(release_text: &str, today: NaiveDate) -> bool {
    let lowered = release_text.to_lowercase();
    if PLACEHOLDER_WORDS.iter().any(|w| lowered.contains(w)) {
        return true;
    }
    contains_future_year(release_text, today)
}

/// Maps a review sentiment label to a rank score. Matches the canonical
/// storefront labels, so the comparison is case-sensitive.
pub fn sentiment_score(reviews: &str) -> u8 {
    if reviews.contains("Very Positive") || reviews.contains("Overwhelmingly") {
        2
    } else if reviews.contains("Positive") {
        1
    } else {
        0
    }
}

/// True when the text contains a standalone 4-digit year greater than the
/// current year, e.g. "2027" in "Late 2027".
fn contains_future_year(text: &str, today: NaiveDate) -> bool {
    use chrono::Datelike;

    let current_year = today.year();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start == 4 {
                if let Ok(year) = text[start..i].parse::<i32>() {
                    if year > current_year {
                        return true;
                    }
                }
            }
        } else {
            i += 1;
        }
    }
    false
}
