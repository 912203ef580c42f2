use std::env;
use std::time::Duration;

use business::application::cart::policy::PersistencePolicy;

const DEFAULT_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF_MS: u64 = 50;

/// Retry settings for background cart writes
#[derive(Debug, Clone, PartialEq)]
pub struct PersistenceConfig {
    pub max_attempts: u32,
    pub retry_backoff: Duration,
}

impl PersistenceConfig {
    /// Environment variables:
    /// - STOREFRONT_PERSIST_ATTEMPTS: attempts per write (default: 3)
    /// - STOREFRONT_PERSIST_BACKOFF_MS: base delay between attempts (default: 50)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("STOREFRONT_PERSIST_ATTEMPTS").ok().as_deref(),
            env::var("STOREFRONT_PERSIST_BACKOFF_MS").ok().as_deref(),
        )
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_values(attempts: Option<&str>, backoff_ms: Option<&str>) -> Self {
        let max_attempts = parse_or(attempts, "STOREFRONT_PERSIST_ATTEMPTS", DEFAULT_ATTEMPTS);
        let backoff_ms = parse_or(backoff_ms, "STOREFRONT_PERSIST_BACKOFF_MS", DEFAULT_BACKOFF_MS);

        Self {
            max_attempts,
            retry_backoff: Duration::from_millis(backoff_ms),
        }
    }

    pub fn policy(&self) -> PersistencePolicy {
        PersistencePolicy::new(self.max_attempts, self.retry_backoff)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, name: &str, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
    }
}
