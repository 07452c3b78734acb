// src/services/pacer.rs
// DOCUMENTATION: Request pacing for the Places API
// PURPOSE: Keep the export under the API's request-rate limits

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::time::Duration;

use crate::config::{Config, PacingStrategy};

/// Pacing step run after every API call
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pace(&self);
}

/// Sleeps a fixed delay after every call
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pace(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Token bucket pacer backed by governor
/// DOCUMENTATION: One permit per period, no burst. Waits only as long as
/// needed, so slow responses are not followed by a redundant sleep.
pub struct RateLimitedPacer {
    limiter: DefaultDirectRateLimiter,
}

impl RateLimitedPacer {
    /// Returns None for a zero period
    pub fn new(period: Duration) -> Option<Self> {
        let quota = Quota::with_period(period)?;
        Some(Self {
            limiter: RateLimiter::direct(quota),
        })
    }
}

#[async_trait]
impl Pacer for RateLimitedPacer {
    async fn pace(&self) {
        self.limiter.until_ready().await;
    }
}

/// Build the pacer selected by configuration
pub fn pacer_from_config(config: &Config) -> Box<dyn Pacer> {
    match config.pacing_strategy {
        PacingStrategy::Fixed => Box::new(FixedDelayPacer::new(config.request_delay)),
        PacingStrategy::RateLimited => match RateLimitedPacer::new(config.request_delay) {
            Some(pacer) => Box::new(pacer),
            None => {
                log::warn!("Rate-limited pacing needs a non-zero delay, pacing disabled");
                Box::new(FixedDelayPacer::new(Duration::ZERO))
            }
        },
    }
}
