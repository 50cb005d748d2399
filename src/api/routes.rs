use axum::{
    routing::get,
    Router,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::aggregator::aggregate;
use crate::limiter::RateDecision;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/games", get(games_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// Rate limit gate, then cache, then a full aggregation pass on a miss.
async fn games_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let now = Utc::now();
    let client = client_key(&headers);

    let remaining = match state.limiter.check(&client, now) {
        RateDecision::Denied { reset_in } => {
            warn!(client = %client, reset_in, "rate limit exceeded");
            return rate_limited_response(reset_in);
        }
        RateDecision::Allowed { remaining } => remaining,
    };

    let (report, cache_status) = match state.cache.get(now) {
        Some(report) => (report, "HIT"),
        None => {
            info!(client = %client, "cache miss, running aggregation");
            let report = aggregate().await;
            state.cache.store(&report, Utc::now());
            (report, "MISS")
        }
    };

    let max_age = state.cache.ttl_secs();
    let mut response = Json(report).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
    response_headers.insert("x-cache", HeaderValue::from_static(cache_status));
    response_headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_str(&format!("public, max-age={}", max_age))
            .unwrap_or_else(|_| HeaderValue::from_static("public")),
    );
    response
}

fn rate_limited_response(reset_in: u64) -> Response {
    let body = Json(serde_json::json!({
        "error": "Rate limit exceeded",
        "resetIn": reset_in,
    }));
    let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
    response_headers.insert(header::RETRY_AFTER, HeaderValue::from(reset_in));
    response
}

/// Client identifier for rate limiting: first forwarded hop, then the
/// real-ip header. Clients behind neither header share one bucket.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        })
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4, 10.0.0.1".parse().unwrap());
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_key(&headers), "1.2.3.4");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_key(&headers), "9.9.9.9");
    }

    #[test]
    fn real_ip_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", " 9.9.9.9 ".parse().unwrap());
        assert_eq!(client_key(&headers), "9.9.9.9");
    }

    #[test]
    fn unidentified_clients_share_a_bucket() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn blank_headers_count_as_unidentified() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "".parse().unwrap());
        headers.insert("x-real-ip", "".parse().unwrap());
        assert_eq!(client_key(&headers), "unknown");
    }
}
