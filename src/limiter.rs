//! Fixed-window rate limiter keyed by client identifier.
//!
//! Each key gets a window of `window` length holding at most `max_requests`
//! requests; the first request past a window's end starts a fresh one.
//! Expired windows are dropped by a periodic sweep so the map stays bounded.
//! The clock is passed in explicitly so tests can pin it.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, PartialEq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Denied { reset_in: u64 },
}

struct RateWindow {
    count: u32,
    reset_at: DateTime<Utc>,
}

pub struct RateLimiter {
    window: chrono::Duration,
    max_requests: u32,
    windows: Mutex<HashMap<String, RateWindow>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window: chrono::Duration::seconds(window.as_secs() as i64),
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Checks and counts one request for `key`. Denials report the seconds
    /// until the window resets, at least 1 so a Retry-After is never zero.
    pub fn check(&self, key: &str, now: DateTime<Utc>) -> RateDecision {
        let mut windows = self.windows.lock().unwrap();

        match windows.get_mut(key) {
            Some(window) if now < window.reset_at => {
                if window.count >= self.max_requests {
                    let reset_in = (window.reset_at - now).num_seconds().max(1) as u64;
                    return RateDecision::Denied { reset_in };
                }
                window.count += 1;
                RateDecision::Allowed {
                    remaining: self.max_requests - window.count,
                }
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    RateWindow {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                RateDecision::Allowed {
                    remaining: self.max_requests - 1,
                }
            }
        }
    }

    /// Drops windows that have already reset. Returns how many were removed.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut windows = self.windows.lock().unwrap();
        let before = windows.len();
        windows.retain(|_, window| now < window.reset_at);
        let removed = before - windows.len();
        if removed > 0 {
            debug!(removed, "swept expired rate windows");
        }
        removed
    }
}
