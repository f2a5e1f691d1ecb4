//! Page fetch pacing
//!
//! Uses the governor crate with a burst of one: the first permit is free,
//! every later permit arrives no sooner than `60 / values_per_minute`
//! seconds after the previous one.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::sync::Arc;
use std::time::Duration;

/// Minimum-interval limiter for page fetches
#[derive(Clone)]
pub struct Pacer {
    limiter: Option<Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>>,
    interval: Option<Duration>,
}

impl Pacer {
    /// Create a pacer allowing `values_per_minute` page fetches per minute.
    ///
    /// `None` or zero disables pacing.
    pub fn new(values_per_minute: Option<u32>) -> Self {
        let interval = values_per_minute
            .filter(|vpm| *vpm > 0)
            .map(|vpm| Duration::from_secs_f64(60.0 / f64::from(vpm)));

        let limiter = interval
            .and_then(Quota::with_period)
            .map(|quota| Arc::new(Governor::direct(quota)));

        Self { limiter, interval }
    }

    /// A pacer that never waits
    pub fn unpaced() -> Self {
        Self {
            limiter: None,
            interval: None,
        }
    }

    /// Minimum gap between two fetches, if pacing is on
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Whether this pacer ever delays
    pub fn is_paced(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until the next fetch may start
    pub async fn wait(&self) {
        if let Some(ref limiter) = self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Take a permit if one is available right now
    pub fn try_acquire(&self) -> bool {
        self.limiter
            .as_ref()
            .map_or(true, |limiter| limiter.check().is_ok())
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::unpaced()
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer")
            .field("interval", &self.interval)
            .finish()
    }
}
