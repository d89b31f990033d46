//! Frame timer backed by an embassy [`Ticker`]

use embassy_time::{Duration, Ticker};
use hexscan_hal::FrameTimer;

/// Fixed-period frame timer
///
/// A ticker keeps a steady cadence even when a frame's work takes a
/// variable amount of time; missed ticks are caught up, not skipped.
pub struct TickerTimer {
    ticker: Ticker,
}

impl TickerTimer {
    /// Tick every `period_us` microseconds
    pub fn new(period_us: u32) -> Self {
        Self {
            ticker: Ticker::every(Duration::from_micros(u64::from(period_us))),
        }
    }
}

impl FrameTimer for TickerTimer {
    async fn next_frame(&mut self) {
        self.ticker.next().await;
    }
}
