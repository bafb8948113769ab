use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Spaces out requests so consecutive ones start at least `delay` apart.
///
/// Shared by concurrent detail fetches, hence the interior lock.
pub struct RateLimiter {
    delay: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            next_slot: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let slot = self.reserve_slot().await;
        if let Some(at) = slot {
            sleep_until(at).await;
        }
    }

    /// Claims the next start time. `None` means the request may start now.
    async fn reserve_slot(&self) -> Option<Instant> {
        let mut next = self.next_slot.lock().await;
        let now = Instant::now();
        let start = next.filter(|at| *at > now);
        *next = Some(start.unwrap_or(now) + self.delay);
        start
    }
}
