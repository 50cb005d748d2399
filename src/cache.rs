//! Single-slot TTL cache for the aggregate report.
//!
//! The report has no per-request parameters, so one process-wide entry is
//! enough. The clock is passed in explicitly so tests can pin it. There is
//! no single-flight guard: two concurrent misses may both aggregate, which
//! is redundant but harmless since aggregation is side-effect-free.

use std::sync::Mutex;
use std::time::Duration;
use chrono::{DateTime, Utc};

use crate::models::AggregateReport;

struct CacheEntry {
    report: AggregateReport,
    captured_at: DateTime<Utc>,
}

pub struct ReportCache {
    ttl: chrono::Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl ReportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: chrono::Duration::seconds(ttl.as_secs() as i64),
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached report, flagged as served-from-cache, while the
    /// entry is younger than the TTL.
    pub fn get(&self, now: DateTime<Utc>) -> Option<AggregateReport> {
        let slot = self.slot.lock().unwrap();
        slot.as_ref().and_then(|entry| {
            if now - entry.captured_at < self.ttl {
                let mut report = entry.report.clone();
                report.cached = true;
                Some(report)
            } else {
                None
            }
        })
    }

    /// Replaces the slot with a freshly aggregated report.
    pub fn store(&self, report: &AggregateReport, now: DateTime<Utc>) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(CacheEntry {
            report: report.clone(),
            captured_at: now,
        });
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
