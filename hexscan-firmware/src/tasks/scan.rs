//! Display scan task
//!
//! Paces the core scanner at the configured frame period.

use defmt::*;

use hexscan_core::scan::{DisplayScanner, FrameReport};
use hexscan_drivers::{DigitLines, Hc595};
use hexscan_hal_rp2040::{Rp2040Output, TickerTimer};

use crate::channels::EDGE_LATCH;

/// Scanner over the RP2040 output lines
pub type Scanner = DisplayScanner<Hc595<Rp2040Output>, DigitLines<[Rp2040Output; 4]>>;

/// Scan task - renders one frame per tick, forever
#[embassy_executor::task]
pub async fn scan_task(mut scanner: Scanner, frame_us: u32) {
    info!("Scan task started");

    let mut timer = TickerTimer::new(frame_us);
    scanner.start();
    info!("Display reset, digit {} enabled", scanner.position().number());

    scanner.run(&EDGE_LATCH, &mut timer, log_frame).await;
}

fn log_frame(report: &FrameReport) {
    if let Some(shift) = report.shift {
        info!("Shift {} -> digit {}", shift, report.digit.number());
    }
    trace!(
        "Frame {}: value {=u8:x} pattern {=u8:#x} on digit {}",
        report.frame,
        report.value,
        report.pattern.bits(),
        report.digit.number()
    );
}
