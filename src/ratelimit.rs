//! Fixed-window request rate limiting.
//!
//! A sliding-window counter per client identity, backed by a shared
//! expiring key-value store the limiter does not own. Windows are
//! fixed-aligned (`floor(now / window) * window`), a deliberate
//! simplification: a client can issue up to twice the nominal limit
//! across a window boundary. Concurrent checks for the same identity may
//! also overshoot by a small margin, since the store round trip is
//! get-then-put rather than a locked increment; both are accepted slack,
//! availability over strict enforcement.
//!
//! When the backing store is unreachable the limiter fails open: the
//! request is allowed and the condition logged, never surfaced to the
//! caller.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use crate::error::Result;

/// Default cap on successful passes per identity per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 100;

/// Default window length in milliseconds.
pub const DEFAULT_WINDOW_MS: i64 = 60_000;

/// Outcome of one rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// True when the request must be rejected.
    pub limited: bool,
    /// Passes left in the current window after this check.
    pub remaining: u32,
    /// Epoch milliseconds at which the current window ends.
    pub reset_epoch_ms: i64,
}

/// The expiring counter store backing the limiter.
///
/// Implementations must be shareable across threads; the limiter performs
/// one `get` and at most one `put` per check. Entries expire via the
/// store's TTL, not explicit deletion.
pub trait CounterStore: Send + Sync {
    /// Read the current count for a window key, `None` when absent or expired.
    fn get(&self, key: &str) -> Result<Option<u64>>;

    /// Write a count with a time-to-live in milliseconds.
    fn put(&self, key: &str, count: u64, ttl_ms: i64) -> Result<()>;
}

/// Sliding-window rate limiter over a shared counter store.
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
    max_requests: u32,
    window_ms: i64,
}

impl RateLimiter {
    /// Create a limiter with the default limits (100 requests / 60s window).
    #[must_use]
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self::with_limits(store, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_MS)
    }

    /// Create a limiter with explicit limits.
    #[must_use]
    pub fn with_limits(store: Arc<dyn CounterStore>, max_requests: u32, window_ms: i64) -> Self {
        Self {
            store,
            max_requests,
            window_ms: window_ms.max(1),
        }
    }

    /// Check and count one request for `identity` at the current time.
    pub fn check(&self, identity: &str) -> RateLimitDecision {
        self.check_at(identity, Utc::now().timestamp_millis())
    }

    /// Clock-explicit variant of [`check`](Self::check), used by callers
    /// that carry their own time source and by tests.
    pub fn check_at(&self, identity: &str, now_ms: i64) -> RateLimitDecision {
        let window_start = now_ms - now_ms.rem_euclid(self.window_ms);
        let reset_epoch_ms = window_start + self.window_ms;
        let key = format!("rate_limit:{identity}:{window_start}");

        let current = match self.store.get(&key) {
            Ok(count) => count.unwrap_or(0),
            Err(err) => {
                warn!(%identity, %err, "counter store unreachable, failing open");
                return RateLimitDecision {
                    limited: false,
                    remaining: self.max_requests.saturating_sub(1),
                    reset_epoch_ms,
                };
            }
        };

        if current >= u64::from(self.max_requests) {
            return RateLimitDecision {
                limited: true,
                remaining: 0,
                reset_epoch_ms,
            };
        }

        let count = current + 1;
        if let Err(err) = self.store.put(&key, count, reset_epoch_ms - now_ms) {
            warn!(%identity, %err, "counter store write failed, failing open");
        }

        #[allow(clippy::cast_possible_truncation)]
        let used = count.min(u64::from(self.max_requests)) as u32;
        RateLimitDecision {
            limited: false,
            remaining: self.max_requests - used,
            reset_epoch_ms,
        }
    }
}

/// In-memory counter store with read-through expiry.
///
/// Default implementation for tests and single-process deployments;
/// production callers hand the limiter their shared store instead.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, (u64, i64)>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<u64>> {
        let now = Utc::now().timestamp_millis();
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match entries.get(key) {
            Some(&(_, expires_at)) if expires_at <= now => {
                entries.remove(key);
                Ok(None)
            }
            Some(&(count, _)) => Ok(Some(count)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, count: u64, ttl_ms: i64) -> Result<()> {
        let expires_at = Utc::now().timestamp_millis() + ttl_ms.max(0);
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(key.to_string(), (count, expires_at));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct BrokenStore;

    impl CounterStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<u64>> {
            Err(Error::StoreUnavailable("connection refused".to_string()))
        }

        fn put(&self, _key: &str, _count: u64, _ttl_ms: i64) -> Result<()> {
            Err(Error::StoreUnavailable("connection refused".to_string()))
        }
    }

    fn limiter(max: u32, window_ms: i64) -> RateLimiter {
        RateLimiter::with_limits(Arc::new(InMemoryStore::new()), max, window_ms)
    }

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let limiter = limiter(3, 60_000);
        let now = 1_700_000_000_000;

        for expected_remaining in [2, 1, 0] {
            let decision = limiter.check_at("ip1", now);
            assert!(!decision.limited);
            assert_eq!(decision.remaining, expected_remaining);
        }

        let decision = limiter.check_at("ip1", now + 10);
        assert!(decision.limited);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn identities_are_counted_separately() {
        let limiter = limiter(1, 60_000);
        let now = 1_700_000_000_000;

        assert!(!limiter.check_at("ip1", now).limited);
        assert!(limiter.check_at("ip1", now).limited);
        assert!(!limiter.check_at("ip2", now).limited);
    }

    #[test]
    fn window_boundary_resets_the_count() {
        let limiter = limiter(2, 1_000);
        // Aligned to a window start for a readable boundary
        let start = 1_700_000_000_000;

        assert!(!limiter.check_at("ip1", start).limited);
        assert!(!limiter.check_at("ip1", start + 999).limited);
        assert!(limiter.check_at("ip1", start + 999).limited);

        // First request of the next window transitions from implicit Unseen
        let decision = limiter.check_at("ip1", start + 1_000);
        assert!(!decision.limited);
        assert_eq!(decision.remaining, 1);
        assert_eq!(decision.reset_epoch_ms, start + 2_000);
    }

    #[test]
    fn reset_epoch_is_window_end() {
        let limiter = limiter(5, 60_000);
        let now = 1_700_000_012_345;
        let decision = limiter.check_at("ip1", now);
        assert_eq!(decision.reset_epoch_ms, 1_700_000_060_000);
        assert!(decision.reset_epoch_ms > now);
    }

    #[test]
    fn unreachable_store_fails_open() {
        let limiter = RateLimiter::with_limits(Arc::new(BrokenStore), 1, 60_000);
        let now = 1_700_000_000_000;

        // Every check passes despite the limit of 1
        for _ in 0..5 {
            assert!(!limiter.check_at("ip1", now).limited);
        }
    }

    #[test]
    fn in_memory_store_expires_entries() {
        let store = InMemoryStore::new();
        assert!(store.put("k", 7, -1).is_ok());
        // TTL already elapsed: read-through expiry drops the entry
        assert_eq!(store.get("k").ok().flatten(), None);

        assert!(store.put("k", 7, 60_000).is_ok());
        assert_eq!(store.get("k").ok().flatten(), Some(7));
    }
}
