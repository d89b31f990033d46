//! Digit enable lines
//!
//! Each digit has its own GPIO, separate from the segment bus. All four
//! lines are written together so exactly one is active after every update.

use hexscan_core::digit::{DigitMask, DIGIT_COUNT};
use hexscan_core::traits::DigitEnable;
use hexscan_hal::OutputPort;

/// Digit enables on a group of output lines, leftmost digit on line 0
pub struct DigitLines<O> {
    port: O,
}

impl<O: OutputPort> DigitLines<O> {
    /// Wrap a port with at least four lines
    pub fn new(port: O) -> Self {
        debug_assert!(port.width() >= DIGIT_COUNT);
        Self { port }
    }

    pub fn port(&self) -> &O {
        &self.port
    }
}

impl<O: OutputPort> DigitEnable for DigitLines<O> {
    fn enable(&mut self, mask: DigitMask) {
        self.port
            .set_pins(u32::from(DigitMask::ALL_LINES), u32::from(mask.bits()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexscan_core::digit::Digit;
    use hexscan_hal::OutputPin;

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn levels(lines: &DigitLines<[MockPin; 4]>) -> [bool; 4] {
        let port = lines.port();
        [port[0].high, port[1].high, port[2].high, port[3].high]
    }

    #[test]
    fn test_enable_is_one_hot() {
        let mut lines = DigitLines::new(<[MockPin; 4]>::default());

        lines.enable(Digit::Digit1.mask());
        assert_eq!(levels(&lines), [true, false, false, false]);

        lines.enable(Digit::Digit4.mask());
        assert_eq!(levels(&lines), [false, false, false, true]);
    }

    #[test]
    fn test_enable_clears_previous() {
        let mut lines = DigitLines::new(<[MockPin; 4]>::default());
        for digit in Digit::ALL {
            lines.enable(digit.mask());
            let lit = levels(&lines).iter().filter(|l| **l).count();
            assert_eq!(lit, 1);
            assert!(levels(&lines)[digit.index()]);
        }
    }
}
