//! Button edge latch
//!
//! Edge handlers run in interrupt context (or an interrupt-driven task) and
//! only set a flag. The scan loop consumes each flag exactly once per frame.
//! Flags are atomics, so a notify racing with a take is never lost: it is
//! either consumed by that take or left pending for the next frame.

use portable_atomic::{AtomicBool, Ordering};

use crate::digit::ShiftDirection;

/// Push-button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Left,
    Right,
}

/// Pending-edge flags shared between edge handlers and the scan loop
pub struct ButtonEdgeLatch {
    left: AtomicBool,
    right: AtomicBool,
}

impl ButtonEdgeLatch {
    /// Create a latch with no pending edges
    pub const fn new() -> Self {
        Self {
            left: AtomicBool::new(false),
            right: AtomicBool::new(false),
        }
    }

    fn flag(&self, button: Button) -> &AtomicBool {
        match button {
            Button::Left => &self.left,
            Button::Right => &self.right,
        }
    }

    /// Record an edge; repeated edges before a take collapse into one
    pub fn notify(&self, button: Button) {
        self.flag(button).store(true, Ordering::Release);
    }

    /// Atomically read and clear the pending flag
    pub fn take_and_clear(&self, button: Button) -> bool {
        self.flag(button).swap(false, Ordering::AcqRel)
    }

    /// Peek at the flag without consuming it
    pub fn is_pending(&self, button: Button) -> bool {
        self.flag(button).load(Ordering::Acquire)
    }

    /// Consume both flags and resolve them into at most one shift
    ///
    /// Left wins when both are pending; the right edge is discarded along
    /// with it rather than carried into the next frame.
    pub fn take_shift(&self) -> Option<ShiftDirection> {
        let left = self.take_and_clear(Button::Left);
        let right = self.take_and_clear(Button::Right);

        match (left, right) {
            (true, _) => Some(ShiftDirection::Left),
            (false, true) => Some(ShiftDirection::Right),
            (false, false) => None,
        }
    }
}

impl Default for ButtonEdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}
