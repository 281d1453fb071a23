use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Minimum-interval spacing for provider call starts.
///
/// The critical section guards a single "last call start" timestamp: each
/// caller computes the remainder of the interval, sleeps it off, then stamps
/// the new start time before releasing. Waiters queue on the mutex, so no
/// two calls ever start closer together than the interval, regardless of
/// fan-out width. The lock is never held across the network call itself.
pub struct CallThrottle {
    min_interval: Duration,
    last_call_start: Mutex<Option<Instant>>,
}

impl CallThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call_start: Mutex::new(None),
        }
    }

    /// Block until the minimum interval since the previous call start has
    /// elapsed, then record this call's start.
    pub async fn acquire(&self) {
        let mut last = self.last_call_start.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "throttling provider call");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}
