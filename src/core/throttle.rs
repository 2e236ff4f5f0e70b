//! Fixed inter-request delay for the rate-limited stats API.
//!
//! The upstream host throttles aggressive clients, so every network call is
//! followed by the same two-second pause. The delay is uniform: no backoff,
//! no retry, no adjustment for prior latency or errors.

use std::time::Duration;

/// Pause applied between consecutive upstream requests.
pub const REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Serial admission control for upstream calls.
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the fixed delay. Called after each request that actually hit
    /// the network; cache hits skip the pause.
    pub async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(REQUEST_DELAY)
    }
}
