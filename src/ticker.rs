/// Clock-tick driver for periodic board re-evaluation
use chrono::{DateTime, Timelike, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{ClockError, Result};
use crate::time::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickReason {
    Start,
    Interval,
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub at: DateTime<Utc>,
    pub reason: TickReason,
}

/// Delay from `now` until the next tick.
///
/// A one-minute interval lands on wall-clock minute boundaries; other
/// intervals are plain fixed delays.
pub fn delay_until_next_tick(now: DateTime<Utc>, interval: Duration) -> Duration {
    if interval != Duration::from_secs(60) {
        return interval;
    }
    let into_minute = Duration::new(u64::from(now.second()), now.nanosecond() % 1_000_000_000);
    interval.saturating_sub(into_minute).max(Duration::from_millis(1))
}

/// Emits ticks on a channel until dropped.
///
/// A tick is sent immediately on spawn, then after every interval, and
/// whenever `resume` is called.
pub struct MinuteTicker {
    resume_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl MinuteTicker {
    pub fn spawn(clock: Arc<dyn Clock>, interval: Duration) -> (Self, mpsc::Receiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::channel(16);
        let (resume_tx, mut resume_rx) = mpsc::channel::<()>(4);

        let handle = tokio::spawn(async move {
            let mut reason = TickReason::Start;
            loop {
                let tick = Tick {
                    at: clock.now(),
                    reason,
                };
                if tick_tx.send(tick).await.is_err() {
                    debug!("Tick receiver dropped - stopping ticker");
                    break;
                }

                let delay = delay_until_next_tick(clock.now(), interval);
                reason = tokio::select! {
                    _ = tokio::time::sleep(delay) => TickReason::Interval,
                    resumed = resume_rx.recv() => match resumed {
                        Some(()) => TickReason::Resume,
                        None => break,
                    },
                };
            }
        });

        (MinuteTicker { resume_tx, handle }, tick_rx)
    }

    /// Request an immediate tick
    pub async fn resume(&self) -> Result<()> {
        self.resume_tx
            .send(())
            .await
            .map_err(|e| ClockError::Other(format!("Ticker stopped: {}", e)))
    }
}

impl Drop for MinuteTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn test_delay_aligns_to_minute() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 45).unwrap();
        assert_eq!(delay_until_next_tick(now, Duration::from_secs(60)), Duration::from_secs(15));

        let on_boundary = Utc.with_ymd_and_hms(2025, 3, 4, 10, 1, 0).unwrap();
        assert_eq!(delay_until_next_tick(on_boundary, Duration::from_secs(60)), Duration::from_secs(60));

        assert_eq!(delay_until_next_tick(now, Duration::from_secs(10)), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_start_and_resume_ticks() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        let (ticker, mut ticks) = MinuteTicker::spawn(Arc::new(clock.clone()), Duration::from_secs(60));

        let first = ticks.recv().await.unwrap();
        assert_eq!(first.reason, TickReason::Start);
        assert_eq!(first.at, instant);

        clock.advance(chrono::Duration::seconds(5));
        ticker.resume().await.unwrap();
        let second = ticks.recv().await.unwrap();
        assert_eq!(second.reason, TickReason::Resume);
        assert_eq!(second.at, instant + chrono::Duration::seconds(5));
    }
}
