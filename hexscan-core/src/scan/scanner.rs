use hexscan_hal::FrameTimer;

use crate::digit::{Digit, DigitSelector, ShiftDirection};
use crate::glyph::{self, SegmentPattern};
use crate::latch::ButtonEdgeLatch;
use crate::traits::{DigitEnable, SegmentBus};

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Frame index since start (wraps)
    pub frame: u32,
    /// Hex value rendered this frame
    pub value: u8,
    /// Pattern sent to the segment bus
    pub pattern: SegmentPattern,
    /// Shift applied this frame, if any
    pub shift: Option<ShiftDirection>,
    /// Digit enabled at the end of the frame
    pub digit: Digit,
}

/// Frame-by-frame display scanner
///
/// The rendered value cycles 0..=F once per frame regardless of button
/// input; buttons only move which digit position is lit.
pub struct DisplayScanner<B, D> {
    bus: B,
    digits: D,
    selector: DigitSelector,
    frame: u32,
}

impl<B: SegmentBus, D: DigitEnable> DisplayScanner<B, D> {
    /// Create a scanner with the given digit lit first
    pub fn new(bus: B, digits: D, initial: Digit) -> Self {
        Self {
            bus,
            digits,
            selector: DigitSelector::new(initial),
            frame: 0,
        }
    }

    /// Bring the outputs to a known state
    ///
    /// Clears the shift register and enables the initial digit. Call once
    /// before the first frame.
    pub fn start(&mut self) {
        self.bus.reset();
        self.digits.enable(self.selector.current());
    }

    /// Run a single frame without waiting
    pub fn step(&mut self, latch: &ButtonEdgeLatch) -> FrameReport {
        let frame = self.frame;
        let value = (frame % 16) as u8;
        let pattern = glyph::encode(value);

        self.bus.transmit(pattern);

        let shift = latch.take_shift();
        if let Some(direction) = shift {
            self.selector.shift(direction);
        }

        self.digits.enable(self.selector.current());
        self.bus.latch();

        self.frame = self.frame.wrapping_add(1);

        FrameReport {
            frame,
            value,
            pattern,
            shift,
            digit: self.selector.position(),
        }
    }

    /// Run `frames` frames, waiting on `timer` after each
    pub async fn run_frames<T, F>(
        &mut self,
        latch: &ButtonEdgeLatch,
        timer: &mut T,
        frames: u32,
        mut on_frame: F,
    ) where
        T: FrameTimer,
        F: FnMut(&FrameReport),
    {
        for _ in 0..frames {
            let report = self.step(latch);
            on_frame(&report);
            timer.next_frame().await;
        }
    }

    /// Scan forever; never returns
    pub async fn run<T, F>(&mut self, latch: &ButtonEdgeLatch, timer: &mut T, mut on_frame: F)
    where
        T: FrameTimer,
        F: FnMut(&FrameReport),
    {
        loop {
            let report = self.step(latch);
            on_frame(&report);
            timer.next_frame().await;
        }
    }

    /// Currently enabled digit
    pub fn position(&self) -> Digit {
        self.selector.position()
    }

    /// Number of frames run so far (wraps)
    pub fn frame(&self) -> u32 {
        self.frame
    }
}
