//! GPIO pin abstractions
//!
//! Provides traits for digital output lines and edge-triggered inputs that
//! can be implemented by chip-specific HALs.

use core::future::Future;

/// Digital output pin
///
/// Writes are fire-and-forget: implementations swallow any bus error,
/// since a GPIO write on the supported chips cannot fail.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// A group of output lines written together
///
/// Mirrors a port-level masked write: only lines selected in
/// `selector_mask` change, each taking the matching bit of `value_mask`.
pub trait OutputPort {
    /// Number of lines in the port
    fn width(&self) -> usize;

    /// Drive the selected lines to the levels in `value_mask`
    fn set_pins(&mut self, selector_mask: u32, value_mask: u32);
}

impl<P: OutputPin, const N: usize> OutputPort for [P; N] {
    fn width(&self) -> usize {
        N
    }

    fn set_pins(&mut self, selector_mask: u32, value_mask: u32) {
        for (i, pin) in self.iter_mut().enumerate() {
            let bit = 1u32 << i;
            if selector_mask & bit != 0 {
                pin.set_state(value_mask & bit != 0);
            }
        }
    }
}

/// Signal transition that wakes an [`EdgeInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high
    #[default]
    Rising,
    /// High to low
    Falling,
}

impl Edge {
    /// The same logical edge seen through an inverted line
    pub const fn flipped(self) -> Self {
        match self {
            Edge::Rising => Edge::Falling,
            Edge::Falling => Edge::Rising,
        }
    }
}

/// Edge-triggered digital input
///
/// The returned future completes once per matching transition. Completing
/// the future acknowledges the pending interrupt for that line, so the
/// same physical edge cannot wake a second wait.
pub trait EdgeInput {
    /// Wait for the next transition of the given kind
    fn wait_for_edge(&mut self, edge: Edge) -> impl Future<Output = ()>;
}
