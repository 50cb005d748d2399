use reqwest::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};

// Fixed browser-identity headers; the upstream storefronts reject requests
// with a bare default user agent.
fn identity_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers
}

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .default_headers(identity_headers())
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetches a page body, treating any non-success status as an error.
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = CLIENT.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::FetchError(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }
    let body = response.text().await?;
    Ok(body)
}
