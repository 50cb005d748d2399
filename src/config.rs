use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub cache_ttl: Duration,
    pub rate_window: Duration,
    pub rate_max_requests: u32,
    pub sweep_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            cache_ttl: Duration::from_secs(env_u64("CACHE_TTL_SECS", 300)?),
            rate_window: Duration::from_secs(env_u64("RATE_WINDOW_SECS", 60)?),
            rate_max_requests: env_u64("RATE_MAX_REQUESTS", 10)? as u32,
            sweep_interval: Duration::from_secs(env_u64("SWEEP_INTERVAL_SECS", 120)?),
        })
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
