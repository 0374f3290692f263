//! Gravity timer.
//!
//! Fires once per fall interval. Whenever the interval changes the timer is
//! rebuilt so the first tick at the new speed lands one full new period after
//! the change; a tick scheduled under the old period is never delivered.

use std::time::Duration;

use log::trace;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug)]
pub struct GravityTimer {
    interval: Interval,
    period_ms: u32,
}

impl GravityTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            interval: build_interval(period_ms),
            period_ms,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Rebuild the timer if `period_ms` differs from the current period.
    ///
    /// Returns `true` if the timer was rebuilt.
    pub fn sync(&mut self, period_ms: u32) -> bool {
        if period_ms == self.period_ms {
            return false;
        }
        trace!("gravity period {}ms -> {}ms", self.period_ms, period_ms);
        self.period_ms = period_ms;
        self.interval = build_interval(period_ms);
        true
    }

    /// Push the next tick one full period from now.
    pub fn restart(&mut self) {
        self.interval.reset();
    }

    /// Wait for the next tick. Cancel safe.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

fn build_interval(period_ms: u32) -> Interval {
    let period = Duration::from_millis(u64::from(period_ms.max(1)));
    let mut interval = interval_at(Instant::now() + period, period);
    // A stalled task gets one catch-up tick, not a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn first_tick_after_one_period() {
        let mut timer = GravityTimer::new(1000);
        let start = Instant::now();
        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn sync_restarts_with_new_period() {
        let mut timer = GravityTimer::new(1000);
        sleep(Duration::from_millis(600)).await;

        assert!(timer.sync(800));
        assert_eq!(timer.period_ms(), 800);

        // Old deadline (t=1000) is gone; next tick is 800ms after the change.
        let changed_at = Instant::now();
        timer.tick().await;
        assert_eq!(changed_at.elapsed(), Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn sync_with_same_period_keeps_schedule() {
        let mut timer = GravityTimer::new(500);
        let start = Instant::now();
        sleep(Duration::from_millis(300)).await;
        assert!(!timer.sync(500));
        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_pushes_next_tick_out() {
        let mut timer = GravityTimer::new(1000);
        sleep(Duration::from_millis(2500)).await;
        timer.restart();
        let restarted_at = Instant::now();
        timer.tick().await;
        assert_eq!(restarted_at.elapsed(), Duration::from_millis(1000));
    }
}
