use std::sync::Arc;
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::info;

use indie_radar::{
    config::Config,
    cache::ReportCache,
    limiter::RateLimiter,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState {
        cache: Arc::new(ReportCache::new(config.cache_ttl)),
        limiter: Arc::new(RateLimiter::new(config.rate_window, config.rate_max_requests)),
        config: Arc::new(config),
    };

    // Sweep expired rate windows so the per-client map stays bounded
    let sweeper = app_state.limiter.clone();
    let sweep_interval = app_state.config.sweep_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await; // the first tick fires immediately
        loop {
            ticker.tick().await;
            sweeper.sweep(Utc::now());
        }
    });

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
