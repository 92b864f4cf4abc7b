/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side throttling of outbound calls
//!
//! Ory Network applies per-project rate limits. This limiter keeps a client
//! below a configured request rate using the `governor` token bucket, so a burst
//! of concurrent callers queues locally instead of tripping `429` responses.

use crate::application::config::RateLimiterConfig;
use crate::application::context::Context;
use crate::constants::{DEFAULT_RATE_LIMIT_BURST_SIZE, RATE_LIMIT_POLL_MS};
use crate::error::AppError;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Shared token bucket for API requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// One token is replenished every `period_seconds / max_requests`. Zero
    /// values are clamped so the limiter always admits some traffic.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = period / config.max_requests.max(1);

        let burst_size = NonZeroU32::new(config.burst_size)
            .or_else(|| NonZeroU32::new(DEFAULT_RATE_LIMIT_BURST_SIZE))
            .unwrap_or(NonZeroU32::MIN);

        // `replenish` is at least 1s / u32::MAX, which is never zero
        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(RATE_LIMIT_POLL_MS)).await;
        }
    }

    /// Waits for a permit, giving up when `ctx` ends first
    pub async fn wait_within(&self, ctx: &Context) -> Result<(), AppError> {
        ctx.run(async {
            self.wait().await;
            Ok::<(), AppError>(())
        })
        .await
    }

    /// Checks if a request can be made immediately, consuming a permit if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
