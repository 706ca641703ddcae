//! Minimum spacing between requests to one remote provider.
//!
//! A [`RequestGate`] is shared by every clone of a geocoder, so concurrent
//! requests queue on it and are released one `interval` apart instead of
//! all waking at once.

use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};

/// Serializes dispatches so that consecutive requests start at least
/// `interval` apart.
#[derive(Debug, Clone)]
pub struct RequestGate {
    interval: Duration,
    last_dispatch: Arc<Mutex<Option<Instant>>>,
}

impl RequestGate {
    /// Creates a gate releasing one request per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_dispatch: Arc::new(Mutex::new(None)),
        }
    }

    /// Spacing enforced between dispatches.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until `interval` has passed since the previous dispatch,
    /// then records this one.
    ///
    /// The lock is held while sleeping, so waiters are released in
    /// arrival order.
    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last = self.last_dispatch.lock().await;
        if let Some(previous) = *last {
            tokio::time::sleep_until(previous + self.interval).await;
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_request_is_not_delayed() {
        let gate = RequestGate::new(Duration::from_secs(5));
        let started = Instant::now();
        gate.wait().await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn concurrent_waiters_are_spaced_by_interval() {
        let gate = RequestGate::new(Duration::from_millis(200));
        let started = Instant::now();

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    gate.wait().await;
                    started.elapsed()
                })
            })
            .collect();

        let mut released = Vec::new();
        for handle in handles {
            released.push(handle.await.unwrap());
        }
        released.sort();

        assert!(released[0] < Duration::from_millis(200));
        assert!(released[1] >= Duration::from_millis(200));
        assert!(released[2] >= Duration::from_millis(400));
    }

    #[tokio::test]
    async fn zero_interval_never_waits() {
        let gate = RequestGate::new(Duration::ZERO);
        let started = Instant::now();
        for _ in 0..10 {
            gate.wait().await;
        }
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
