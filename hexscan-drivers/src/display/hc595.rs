//! 74HC595 segment bus
//!
//! Bit-banged serial-in/parallel-out shift register. Seven clock pulses
//! shift one pattern into the shift stage; a latch pulse copies the stage
//! to the output pins in one step, so a half-shifted pattern is never
//! visible on the segments.

use hexscan_core::config::BitOrder;
use hexscan_core::glyph::{SegmentPattern, SEGMENT_COUNT};
use hexscan_core::traits::SegmentBus;
use hexscan_hal::OutputPin;

/// 74HC595 driven from four GPIO lines
pub struct Hc595<P> {
    /// Serial data (SER)
    data: P,
    /// Shift clock (SRCLK)
    clock: P,
    /// Storage clock (RCLK)
    latch: P,
    /// Shift register clear (SRCLR), low clears
    reset: P,
    bit_order: BitOrder,
    /// Segments are lit by a low output
    common_anode: bool,
}

impl<P: OutputPin> Hc595<P> {
    /// Create a driver and park the lines at their idle levels
    pub fn new(
        data: P,
        clock: P,
        latch: P,
        reset: P,
        bit_order: BitOrder,
        common_anode: bool,
    ) -> Self {
        let mut bus = Self {
            data,
            clock,
            latch,
            reset,
            bit_order,
            common_anode,
        };
        bus.clock.set_low();
        bus.latch.set_low();
        bus
    }

    /// Bits as they should appear on the register outputs
    pub fn wire_bits(&self, pattern: SegmentPattern) -> u8 {
        if self.common_anode {
            pattern.active_low()
        } else {
            pattern.bits()
        }
    }

    fn pulse(pin: &mut P) {
        pin.set_high();
        pin.set_low();
    }
}

impl<P: OutputPin> SegmentBus for Hc595<P> {
    fn transmit(&mut self, pattern: SegmentPattern) {
        let bits = self.wire_bits(pattern);

        for i in 0..SEGMENT_COUNT {
            let index = match self.bit_order {
                BitOrder::LsbFirst => i,
                BitOrder::MsbFirst => SEGMENT_COUNT - 1 - i,
            };
            self.data.set_state((bits >> index) & 1 != 0);
            Self::pulse(&mut self.clock);
        }
    }

    fn latch(&mut self) {
        Self::pulse(&mut self.latch);
    }

    fn reset(&mut self) {
        self.reset.set_low();
        self.reset.set_high();
    }
}
