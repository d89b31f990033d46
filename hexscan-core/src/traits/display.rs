//! Display output traits

use crate::digit::DigitMask;
use crate::glyph::SegmentPattern;

/// Serial path to the segment lines
///
/// Typically a shift register: `transmit` clocks a pattern into the shift
/// stage, `latch` copies it to the outputs. Nothing reaches the segments
/// until the latch.
pub trait SegmentBus {
    /// Shift one pattern into the register
    fn transmit(&mut self, pattern: SegmentPattern);

    /// Present the shifted pattern on the outputs
    fn latch(&mut self);

    /// Clear the shift register
    fn reset(&mut self);
}

/// Digit enable lines
pub trait DigitEnable {
    /// Enable exactly the digit in `mask`, disabling the others
    fn enable(&mut self, mask: DigitMask);
}
