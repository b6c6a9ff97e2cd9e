//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits enforced, both over the same window:
//! - Per-sender: submissions keyed by the normalized sender email
//! - Global: every relay call, to protect the relay account's quota
//!
//! Counters live in process memory only; a restart forgets them.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_SENDER_LIMIT: usize = 3;
const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_WINDOW_SECS: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_sender_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_sender_limit: DEFAULT_PER_SENDER_LIMIT,
            global_limit: DEFAULT_GLOBAL_LIMIT,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    /// Optional:
    /// - `CONTACT_RATE_LIMIT_PER_SENDER`: default 3
    /// - `CONTACT_RATE_LIMIT_GLOBAL`: default 30
    /// - `CONTACT_RATE_LIMIT_WINDOW_SECS`: default 600
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            per_sender_limit: env_parse("CONTACT_RATE_LIMIT_PER_SENDER", DEFAULT_PER_SENDER_LIMIT),
            global_limit: env_parse("CONTACT_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            window: Duration::from_secs(env_parse("CONTACT_RATE_LIMIT_WINDOW_SECS", DEFAULT_WINDOW_SECS)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-sender rate limit exceeded (max {limit} submissions/{window_secs}s)")]
    PerSenderExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} submissions/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-sender submission timestamps.
    sender_requests: HashMap<String, VecDeque<Instant>>,
    /// Global submission timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    /// Limiter configured from the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-sender and global limits, then record the submission.
    pub fn check_and_record(&self, sender: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(sender, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, sender: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;
        let window_secs = cfg.window.as_secs();

        // Prune and check global first (no borrow conflict).
        prune_window(&mut inner.global_requests, now, cfg.window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.global_limit, window_secs });
        }

        let sender_deque = inner
            .sender_requests
            .entry(sender.to_ascii_lowercase())
            .or_default();
        prune_window(sender_deque, now, cfg.window);
        if sender_deque.len() >= cfg.per_sender_limit {
            return Err(RateLimitError::PerSenderExceeded { limit: cfg.per_sender_limit, window_secs });
        }

        sender_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Drop senders whose windows have fully drained.
        inner.sender_requests.retain(|_, deque| {
            prune_window(deque, now, cfg.window);
            !deque.is_empty()
        });

        Ok(())
    }

    /// Give back the most recent slot recorded for `sender`, for a
    /// submission that was never delivered.
    pub fn release(&self, sender: &str) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let key = sender.to_ascii_lowercase();
        let Some(deque) = inner.sender_requests.get_mut(&key) else {
            return;
        };
        if deque.pop_back().is_none() {
            return;
        }
        if deque.is_empty() {
            inner.sender_requests.remove(&key);
        }
        inner.global_requests.pop_back();
    }
}

impl RateLimitError {
    #[must_use]
    pub fn window_secs(&self) -> u64 {
        match self {
            Self::PerSenderExceeded { window_secs, .. } | Self::GlobalExceeded { window_secs, .. } => *window_secs,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
