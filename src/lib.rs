pub mod aggregator;
pub mod api;
pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod fetch;
pub mod limiter;
pub mod models;
pub mod sources;

use std::sync::Arc;
use cache::ReportCache;
use config::Config;
use limiter::RateLimiter;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<ReportCache>,
    pub limiter: Arc<RateLimiter>,
}
