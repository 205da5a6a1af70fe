// Retry pacing for reconnection attempts

use std::time::Duration;

/// Capped exponential backoff between reconnection attempts
///
/// Each call to `next_delay` doubles the wait, up to `max_delay`, until
/// `max_attempts` is spent. A successful connection resets the counter.
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
            max_delay,
            attempts: 0,
        }
    }

    /// Delay before the next attempt, or None when the budget is spent
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempts >= self.max_attempts {
            return None;
        }

        let factor = 2u32.saturating_pow(self.attempts);
        let delay = self.base_delay.saturating_mul(factor).min(self.max_delay);

        self.attempts += 1;

        Some(delay)
    }

    /// Forget past failures (after a successful connection)
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }
}

impl Default for RetryPolicy {
    /// 5 attempts, 250ms base, capped at 8s
    fn default() -> Self {
        Self::new(5, Duration::from_millis(250), Duration::from_secs(8))
    }
}
