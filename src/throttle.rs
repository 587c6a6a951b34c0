//! Quota throttling between backend calls.
//!
//! External secret stores impose request quotas; bulk operations (startup
//! migrations externalizing every credential field) can trip them. The
//! manager inserts a configurable delay after every call that counts
//! against the quota. The delay is an injectable strategy so tests can
//! count waits without wall-clock sleeps.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Delay strategy applied after quota-consuming backend calls.
#[async_trait]
pub trait Throttle: Send + Sync {
    /// Suspend the current operation for the configured delay.
    ///
    /// Implementations must surface an interrupted wait as
    /// [`crate::SecretsError::Interrupted`] rather than swallowing it: an
    /// interruption means orderly shutdown mid-operation, and the caller
    /// must not assume the preceding backend call's effects are finalized.
    async fn wait(&self) -> Result<()>;
}

/// Real throttle over `tokio::time::sleep`.
///
/// A zero delay disables throttling entirely: `wait` returns without ever
/// suspending, so quota-insensitive deployments pay nothing.
#[derive(Debug, Clone)]
pub struct QuotaThrottle {
    delay: Duration,
}

impl QuotaThrottle {
    /// Create a throttle with the given inter-call delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Throttle for QuotaThrottle {
    async fn wait(&self) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_zero_delay_never_suspends() {
        let throttle = QuotaThrottle::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..1000 {
            throttle.wait().await.unwrap();
        }
        // No sleeps were scheduled; this loop is effectively instant.
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_positive_delay_sleeps() {
        let throttle = QuotaThrottle::new(Duration::from_millis(100));
        let start = tokio::time::Instant::now();
        throttle.wait().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
