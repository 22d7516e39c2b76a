//! Wall-clock ticker backed by a tokio interval.

use std::time::Duration;

use focusgate_core::Ticker;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Ticks every `period` while armed. `next()` never resolves while disarmed,
/// so a `select!` loop simply stops seeing ticks.
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Wait for the next tick.
    pub async fn next(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Ticker for IntervalTicker {
    /// Must be called inside a tokio runtime.
    fn arm(&mut self) {
        let now = Instant::now();
        let start = now.checked_add(self.period).unwrap_or(now);
        let mut interval = time::interval_at(start, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn armed_ticker_fires_after_one_period() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        ticker.arm();
        let start = Instant::now();
        ticker.next().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        ticker.next().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_ticker_never_fires() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        ticker.arm();
        ticker.disarm();
        assert!(!ticker.is_armed());
        let fired = time::timeout(Duration::from_secs(10), ticker.next()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_period_arms_without_overflow() {
        let mut ticker = IntervalTicker::new(Duration::MAX);
        ticker.arm();
        assert!(ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_restarts_the_period() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        ticker.arm();
        time::advance(Duration::from_millis(700)).await;
        ticker.disarm();
        ticker.arm();
        let start = Instant::now();
        ticker.next().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
