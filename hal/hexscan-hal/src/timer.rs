//! Frame pacing
//!
//! The scan loop advances one frame per timer tick. On hardware the tick
//! comes from an async ticker; on the host a [`VirtualClock`] stands in so
//! simulations run without wall-clock delay.

use core::future::Future;

/// Fixed-period frame timer
pub trait FrameTimer {
    /// Wait until the next frame boundary
    fn next_frame(&mut self) -> impl Future<Output = ()>;
}

/// Virtual clock for simulation and host tests
///
/// Every `next_frame` completes immediately and advances virtual time by
/// one period.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    period_us: u32,
    elapsed_us: u64,
    frames: u32,
}

impl VirtualClock {
    /// Create a clock that advances `period_us` per frame
    pub const fn new(period_us: u32) -> Self {
        Self {
            period_us,
            elapsed_us: 0,
            frames: 0,
        }
    }

    /// Virtual time elapsed since creation (µs)
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    /// Number of frame boundaries passed
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl FrameTimer for VirtualClock {
    async fn next_frame(&mut self) {
        self.elapsed_us += u64::from(self.period_us);
        self.frames = self.frames.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_virtual_clock_advances_per_frame() {
        let mut clock = VirtualClock::new(62_500);
        assert_eq!(clock.elapsed_us(), 0);

        block_on(async {
            for _ in 0..16 {
                clock.next_frame().await;
            }
        });

        assert_eq!(clock.frames(), 16);
        assert_eq!(clock.elapsed_us(), 1_000_000);
    }
}
