//! `embedded-hal` adapters
//!
//! Wraps any `embedded-hal` 1.0 output or `embedded-hal-async` wait-capable
//! input so it can be used through the hexscan traits. Chip HALs (embassy-rp
//! and friends) implement the `embedded-hal` traits, so this is the usual
//! way to hand real pins to the drivers.

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal_async::digital::Wait;

use crate::gpio::{Edge, EdgeInput, OutputPin};

/// Output pin backed by an `embedded-hal` pin
///
/// Levels are logical: an active-low pin is driven low for `set_high`.
/// The last written level is cached, since `embedded-hal` only exposes
/// read-back through `&mut self`.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
    inverted: bool,
}

impl<P: EhOutputPin> EhOutput<P> {
    /// Wrap an active-high pin, driving it to logical low
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, false)
    }

    /// Wrap an active-low pin, driving it to logical low
    pub fn active_low(pin: P) -> Self {
        Self::with_polarity(pin, true)
    }

    /// Wrap a pin with the given polarity, driving it to logical low
    pub fn with_polarity(pin: P, inverted: bool) -> Self {
        let mut out = Self {
            pin,
            high: false,
            inverted,
        };
        out.set_low();
        out
    }

    /// Whether the physical level is inverted
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, high: bool) {
        let _ = if high != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.high = high;
    }
}

impl<P: EhOutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Edge input backed by an `embedded-hal-async` [`Wait`] pin
///
/// An active-low input waits for the opposite physical edge, so a logical
/// rising edge is always a press on either wiring.
pub struct EhEdge<P> {
    pin: P,
    inverted: bool,
}

impl<P: Wait> EhEdge<P> {
    /// Wrap an active-high input pin
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, false)
    }

    /// Wrap an input pin with the given polarity
    pub fn with_polarity(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }
}

impl<P: Wait> EdgeInput for EhEdge<P> {
    async fn wait_for_edge(&mut self, edge: Edge) {
        let edge = if self.inverted { edge.flipped() } else { edge };
        let _ = match edge {
            Edge::Rising => self.pin.wait_for_rising_edge().await,
            Edge::Falling => self.pin.wait_for_falling_edge().await,
        };
    }
}
