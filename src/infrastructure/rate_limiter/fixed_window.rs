//! Fixed-window quota limiter
//!
//! Each key gets at most `limit` requests per window of `window` duration.
//! The first request from a key (or the first after its window elapses)
//! starts a fresh window with count 1. State lives in process memory for
//! the lifetime of the server; expired windows can be purged as memory
//! hygiene but correctness never depends on it.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{current_time_millis, QuotaDecision, QuotaLimiter};
use crate::config::AdviceRateLimitConfig;

#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    /// Window start, Unix milliseconds
    window_start: u64,
}

/// In-memory fixed-window limiter
pub struct FixedWindowLimiter {
    windows: RwLock<HashMap<String, WindowState>>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            limit,
            window,
        }
    }

    pub fn from_config(config: &AdviceRateLimitConfig) -> Self {
        Self::new(
            config.max_requests,
            Duration::from_secs(config.window_seconds),
        )
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn window_millis(&self) -> u64 {
        self.window.as_millis() as u64
    }

    fn expired(&self, state: &WindowState, now: u64) -> bool {
        now.saturating_sub(state.window_start) >= self.window_millis()
    }

    /// Drop windows that have elapsed. Returns the number of keys removed.
    pub async fn purge_expired(&self) -> usize {
        let now = current_time_millis();
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, state| now.saturating_sub(state.window_start) < self.window_millis());
        let removed = before - windows.len();
        if removed > 0 {
            debug!(removed, "Purged expired rate-limit windows");
        }
        removed
    }
}

#[async_trait]
impl QuotaLimiter for FixedWindowLimiter {
    async fn check_and_consume(&self, key: &str) -> QuotaDecision {
        let now = current_time_millis();
        // Single write lock spans the whole check-and-increment sequence so
        // concurrent requests from one key cannot both observe "under limit".
        let mut windows = self.windows.write().await;

        let state = windows.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        if self.expired(state, now) {
            state.count = 0;
            state.window_start = now;
        }

        state.count += 1;

        if state.count <= self.limit {
            QuotaDecision::Allowed {
                remaining: self.limit - state.count,
            }
        } else {
            let elapsed = now.saturating_sub(state.window_start);
            let retry_after_ms = self.window_millis().saturating_sub(elapsed);
            QuotaDecision::Denied {
                retry_after: retry_after_ms.div_ceil(1000).max(1),
            }
        }
    }

    async fn remaining(&self, key: &str) -> u32 {
        let now = current_time_millis();
        let windows = self.windows.read().await;

        match windows.get(key) {
            Some(state) if !self.expired(state, now) => self.limit.saturating_sub(state.count),
            _ => self.limit,
        }
    }
}
