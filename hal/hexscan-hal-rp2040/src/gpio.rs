//! GPIO allocation and pin construction
//!
//! Tracks which GPIO pins are in use to prevent conflicts, and turns a
//! configured pin into a wrapped embassy-rp output or edge input.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use heapless::FnvIndexSet;
use hexscan_core::config::{PinConfig, PinMap};
use hexscan_hal::{EhEdge, EhOutput};

use crate::pins::{PinBank, PinError};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Output line with config polarity applied
pub type Rp2040Output = EhOutput<Output<'static>>;

/// Edge-triggered input with config polarity applied
pub type Rp2040Edge = EhEdge<Input<'static>>;

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin));
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            _ => Err(PinError::AlreadyTaken(pin)),
        }
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Check a pin map against the RP2040 GPIO bank before claiming anything
///
/// Returns the number of distinct pins the map uses.
pub fn check_pin_map(map: &PinMap) -> Result<usize, PinError> {
    let mut alloc = GpioAllocator::new();
    for pin in map.all() {
        alloc.allocate(pin.pin)?;
    }
    Ok(alloc.allocated_count())
}

/// Take a configured pin as a push-pull output, logically low
pub fn output(bank: &mut PinBank, config: PinConfig) -> Result<Rp2040Output, PinError> {
    let pin = bank.take(config.pin)?;
    // Start at the inactive physical level so the line does not glitch
    let level = if config.inverted { Level::High } else { Level::Low };
    Ok(EhOutput::with_polarity(
        Output::new(pin, level),
        config.inverted,
    ))
}

/// Take a configured pin as an edge-triggered input
pub fn edge_input(bank: &mut PinBank, config: PinConfig) -> Result<Rp2040Edge, PinError> {
    let pin = bank.take(config.pin)?;
    let pull = if config.pull_up { Pull::Up } else { Pull::None };
    Ok(EhEdge::with_polarity(Input::new(pin, pull), config.inverted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator() {
        let mut alloc = GpioAllocator::new();

        assert!(alloc.allocate(11).is_ok());

        // Can't allocate same pin twice
        assert_eq!(alloc.allocate(11), Err(PinError::AlreadyTaken(11)));
        assert_eq!(alloc.allocated_count(), 1);

        // Can allocate different pin
        assert!(alloc.allocate(12).is_ok());
        assert_eq!(alloc.allocated_count(), 2);
    }

    #[test]
    fn test_allocator_range() {
        let mut alloc = GpioAllocator::new();
        assert!(alloc.allocate(29).is_ok());
        assert_eq!(alloc.allocate(30), Err(PinError::InvalidPin(30)));
    }

    #[test]
    fn test_check_pin_map() {
        let mut map = PinMap::default();
        assert_eq!(check_pin_map(&map), Ok(10));

        map.left = PinConfig::new(40);
        assert_eq!(check_pin_map(&map), Err(PinError::InvalidPin(40)));

        map.left = map.clock;
        assert_eq!(check_pin_map(&map), Err(PinError::AlreadyTaken(3)));
    }
}
