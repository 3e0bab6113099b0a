//! Debounced search input.

use std::time::{Duration, Instant};

/// Default settle delay in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Holds the latest typed query until it has been stable for `delay`.
///
/// Every `input` replaces the pending query and restarts the delay, so only
/// the last value typed within a burst ever settles.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<PendingQuery>,
    settled: String,
}

#[derive(Debug, Clone)]
struct PendingQuery {
    value: String,
    due: Instant,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            settled: String::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedule `value`, cancelling any earlier pending value
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(PendingQuery {
            value: value.into(),
            due: now + self.delay,
        });
    }

    /// Settle the pending value if its delay has elapsed.
    ///
    /// Returns true when a value settled during this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if now >= pending.due => {
                if let Some(pending) = self.pending.take() {
                    self.settled = pending.value;
                }
                true
            }
            _ => false,
        }
    }

    /// Settle `value` immediately, dropping anything pending
    pub fn settle_now(&mut self, value: impl Into<String>) {
        self.pending = None;
        self.settled = value.into();
    }

    /// Drop the pending value without settling it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// The value most recently typed (pending or settled)
    pub fn current(&self) -> &str {
        self.pending
            .as_ref()
            .map(|p| p.value.as_str())
            .unwrap_or(&self.settled)
    }

    /// The value filtering should use
    pub fn settled(&self) -> &str {
        &self.settled
    }
}
