use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::rotation::RotationClock;
use crate::config::FieldConfig;
use crate::models::Rotation;

/// Per-frame driver for the field rotation.
///
/// Ticks on a fixed interval, feeds the measured time since the previous tick
/// into the [`RotationClock`] and publishes the result. Each tick only adds
/// two numbers; the field geometry is never touched.
pub struct FieldAnimator {
    clock: RotationClock,
    interval: Duration,
    publisher: watch::Sender<Rotation>,
}

impl FieldAnimator {
    pub fn new(config: &FieldConfig) -> Self {
        let clock = RotationClock::new(config.rotation_x_divisor, config.rotation_y_divisor);
        let (publisher, _) = watch::channel(clock.rotation());
        Self {
            clock,
            interval: config.tick_interval(),
            publisher,
        }
    }

    /// Receiver that always holds the latest rotation.
    pub fn subscribe(&self) -> watch::Receiver<Rotation> {
        self.publisher.subscribe()
    }

    pub fn spawn(self, token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(token))
    }

    pub async fn run(mut self, token: CancellationToken) {
        info!(interval_ms = self.interval.as_millis() as u64, "Field animator started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = Instant::now();

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("Field animator shutting down...");
                    break;
                }
                now = ticker.tick() => {
                    let delta = now.saturating_duration_since(last);
                    last = now;
                    let rotation = self.clock.advance(delta.as_secs_f64());
                    self.publisher.send_replace(rotation);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rotation_tracks_elapsed_time() {
        let animator = FieldAnimator::new(&FieldConfig::default());
        let rotation = animator.subscribe();
        let token = CancellationToken::new();
        let handle = animator.spawn(token.clone());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let r = *rotation.borrow();
        assert!(r.x < 0.0 && r.y < 0.0);
        assert!(r.x >= -5.0 / 20.0 - 1e-4, "x = {}", r.x);
        assert!(r.y >= -5.0 / 25.0 - 1e-4, "y = {}", r.y);
        assert!(r.x <= -4.9 / 20.0, "x = {}", r.x);

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_updates() {
        let animator = FieldAnimator::new(&FieldConfig::default());
        let rotation = animator.subscribe();
        let token = CancellationToken::new();
        let handle = animator.spawn(token.clone());

        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
        handle.await.unwrap();

        let frozen = *rotation.borrow();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*rotation.borrow(), frozen);
    }
}
