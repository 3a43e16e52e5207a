//! Request-rate limiting
//!
//! The limiter is an explicitly-owned component injected into the advice
//! pipeline, never a process-wide singleton; tests construct isolated
//! instances per scenario. The server-held instance is the authoritative
//! control point and fails closed — counters reported by any client-side
//! mirror are advisory only and never accepted as input.

pub mod fixed_window;

pub use fixed_window::FixedWindowLimiter;

use async_trait::async_trait;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Outcome of one consume attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    /// Request admitted; `remaining` is the quota left in the active window
    Allowed { remaining: u32 },
    /// Quota exhausted; `retry_after` is seconds until the window resets
    Denied { retry_after: u64 },
}

impl QuotaDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, QuotaDecision::Allowed { .. })
    }
}

/// Interface for per-key request quotas over a time window.
///
/// Backing stores are swappable behind this trait; the in-memory
/// [`FixedWindowLimiter`] is the default.
#[async_trait]
pub trait QuotaLimiter: Send + Sync {
    /// Atomically check the key's quota and consume one unit.
    ///
    /// The unit is spent for every attempt, whatever happens downstream;
    /// failed upstream calls are not free.
    async fn check_and_consume(&self, key: &str) -> QuotaDecision;

    /// Remaining quota for the key's active window, or the full limit when
    /// no window is active. Does not consume.
    async fn remaining(&self, key: &str) -> u32;
}

/// Current time in milliseconds since the Unix epoch
pub(crate) fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis() as u64
}
