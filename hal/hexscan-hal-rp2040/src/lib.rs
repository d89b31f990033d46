//! RP2040-specific HAL for the hexscan display
//!
//! Provides RP2040 implementations of the shared `hexscan-hal` traits:
//!
//! - Pin bank for taking GPIOs by number from the config
//! - Pin map checking before any pin is claimed
//! - Output and edge-input construction from a [`PinConfig`](hexscan_core::config::PinConfig)
//! - Ticker-backed frame timer

#![no_std]

pub mod gpio;
pub mod pins;
pub mod timer;

pub use gpio::{check_pin_map, edge_input, output, GpioAllocator, Rp2040Edge, Rp2040Output};
pub use pins::{PinBank, PinError};
pub use timer::TickerTimer;
