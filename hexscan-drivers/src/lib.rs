//! Hardware driver implementations
//!
//! Concrete implementations of the `hexscan-core` display traits over
//! `hexscan-hal` pins:
//!
//! - 74HC595 segment bus
//! - Dedicated digit enable lines
//! - Edge-triggered push-buttons feeding the edge latch

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod display;

pub use button::ButtonWatcher;
pub use display::{DigitLines, Hc595};
