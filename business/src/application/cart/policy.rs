use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Retry policy for background cart writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistencePolicy {
    max_attempts: u32,
    retry_backoff: Duration,
}

impl PersistencePolicy {
    /// `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, retry_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the attempt following `attempt` (1-based). Grows linearly.
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(attempt)
    }
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BACKOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_attempts_to_at_least_one() {
        let policy = PersistencePolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn should_grow_backoff_linearly() {
        let policy = PersistencePolicy::new(3, Duration::from_millis(50));

        assert_eq!(policy.backoff_after(1), Duration::from_millis(50));
        assert_eq!(policy.backoff_after(2), Duration::from_millis(100));
    }

    #[test]
    fn should_default_to_three_attempts() {
        let policy = PersistencePolicy::default();

        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.backoff_after(1), Duration::from_millis(50));
    }
}
