use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::consts;
use crate::errors::ExplainerError;

struct WindowSlot {
    window_start: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by source identity (client IP).
/// Over-limit requests are rejected immediately, never queued.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    slots: DashMap<String, WindowSlot>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            slots: DashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            consts::RATE_LIMIT_MAX_REQUESTS,
            Duration::from_secs(consts::RATE_LIMIT_WINDOW_SECS),
        )
    }

    /// Counts one request for `identity`. Errors once the window's budget is
    /// spent; the window resets after it elapses.
    pub fn check(&self, identity: &str) -> Result<(), ExplainerError> {
        let now = Instant::now();
        let mut slot = self
            .slots
            .entry(identity.to_string())
            .or_insert_with(|| WindowSlot {
                window_start: now,
                count: 0,
            });

        if now.duration_since(slot.window_start) >= self.window {
            slot.window_start = now;
            slot.count = 0;
        }

        if slot.count >= self.max_requests {
            return Err(ExplainerError::RateLimitError(
                "Too many requests. Please try again later.".to_string(),
            ));
        }

        slot.count += 1;
        Ok(())
    }
}
