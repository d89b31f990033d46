//! Display configuration types

use hexscan_hal::Edge;

use crate::digit::{Digit, DIGIT_COUNT};

/// Default frame period (16 frames per second)
pub const DEFAULT_FRAME_US: u32 = 62_500;

/// Default button lockout after an accepted edge
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// Order in which pattern bits are shifted onto the data line
///
/// With seven clocks into a 74HC595, `LsbFirst` leaves segment `a` on Q0
/// and segment `g` on Q6. `MsbFirst` reverses that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    #[default]
    LsbFirst,
    MsbFirst,
}

/// Push-button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Transition that counts as a press
    pub edge: Edge,
    /// Lockout after an accepted edge (ms), 0 disables
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Rising,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Pin assignment for the display and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Shift register serial data
    pub data: PinConfig,
    /// Shift register clock
    pub clock: PinConfig,
    /// Storage register clock
    pub latch: PinConfig,
    /// Shift register clear
    pub reset: PinConfig,
    /// Digit enables, leftmost first
    pub digits: [PinConfig; DIGIT_COUNT],
    pub left: PinConfig,
    pub right: PinConfig,
}

impl PinMap {
    /// Number of pins in the map
    pub const LEN: usize = 6 + DIGIT_COUNT;

    /// Every pin in the map
    pub fn all(&self) -> [PinConfig; Self::LEN] {
        [
            self.data,
            self.clock,
            self.latch,
            self.reset,
            self.digits[0],
            self.digits[1],
            self.digits[2],
            self.digits[3],
            self.left,
            self.right,
        ]
    }

    /// First GPIO number assigned more than once, if any
    pub fn find_duplicate(&self) -> Option<u8> {
        let pins = self.all();
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].iter().any(|b| b.pin == a.pin) {
                return Some(a.pin);
            }
        }
        None
    }
}

impl Default for PinMap {
    /// Raspberry Pi Pico wiring
    fn default() -> Self {
        Self {
            data: PinConfig::new(2),
            clock: PinConfig::new(3),
            latch: PinConfig::new(4),
            reset: PinConfig::new(5),
            digits: [
                PinConfig::new(6),
                PinConfig::new(7),
                PinConfig::new(8),
                PinConfig::new(9),
            ],
            left: PinConfig::with_pullup(14),
            right: PinConfig::with_pullup(15),
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Frame period (µs)
    pub frame_us: u32,
    pub bit_order: BitOrder,
    /// Segments are lit by a low data bit
    pub common_anode: bool,
    /// Digit lit at startup
    pub initial_digit: Digit,
    pub buttons: ButtonConfig,
    pub pins: PinMap,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_us: DEFAULT_FRAME_US,
            bit_order: BitOrder::LsbFirst,
            common_anode: true,
            initial_digit: Digit::Digit1,
            buttons: ButtonConfig::default(),
            pins: PinMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_duplicates() {
        let config = DisplayConfig::default();
        assert_eq!(config.pins.find_duplicate(), None);
        assert_eq!(config.frame_us, 62_500);
        assert!(config.common_anode);
        assert_eq!(config.initial_digit, Digit::Digit1);
    }

    #[test]
    fn test_find_duplicate() {
        let mut pins = PinMap::default();
        pins.right = PinConfig::new(7);
        assert_eq!(pins.find_duplicate(), Some(7));
    }

    #[test]
    fn test_pin_constructors() {
        assert!(PinConfig::inverted(3).inverted);
        assert!(!PinConfig::inverted(3).pull_up);
        assert!(PinConfig::with_pullup(3).pull_up);
        assert_eq!(PinConfig::new(0), PinConfig::default());
    }
}
