//! Client-side request throttle.
//!
//! The API expects callers to stay under a fixed request rate. The throttle
//! enforces a minimum interval of `1 / requests_per_second` between requests
//! issued through one client, sleeping off the remainder when a request
//! arrives too early.

use std::time::Duration;

use log::warn;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

#[derive(Debug)]
pub(crate) struct RateLimiter {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Build a limiter for the given rate. Fractional rates are allowed;
    /// a non-positive rate disables throttling.
    pub(crate) fn new(requests_per_second: f64) -> Self {
        let interval = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until the next request may be sent. Returns whether the call had
    /// to sleep. The lock is held across the sleep so concurrent callers are
    /// spaced out rather than released in a burst.
    pub(crate) async fn acquire(&self) -> bool {
        let mut last = self.last_request.lock().await;
        let limited = match *last {
            Some(prev) => {
                let elapsed = prev.elapsed();
                if elapsed < self.interval {
                    let wait = self.interval - elapsed;
                    warn!("Rate limiting applied. Sleeping for {:?}.", wait);
                    sleep(wait).await;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        *last = Some(Instant::now());
        limited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_request_is_not_limited() {
        let limiter = RateLimiter::new(4.0);
        assert!(!limiter.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_requests_wait_out_the_interval() {
        let limiter = RateLimiter::new(2.0);
        let start = Instant::now();
        assert!(!limiter.acquire().await);
        assert!(limiter.acquire().await);
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn naturally_spaced_requests_do_not_sleep() {
        let limiter = RateLimiter::new(2.0);
        limiter.acquire().await;
        sleep(Duration::from_millis(600)).await;
        assert!(!limiter.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_rate_disables_throttling() {
        let limiter = RateLimiter::new(0.0);
        assert!(!limiter.acquire().await);
        assert!(!limiter.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn fractional_rates_are_supported() {
        let limiter = RateLimiter::new(0.5);
        let start = Instant::now();
        limiter.acquire().await;
        assert!(limiter.acquire().await);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
