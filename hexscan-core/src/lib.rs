//! Board-agnostic core logic for the hexscan display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Seven-segment glyph table
//! - Digit selection with wraparound
//! - Interrupt-to-loop button edge latch
//! - Frame-by-frame display scan loop
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod digit;
pub mod glyph;
pub mod latch;
pub mod scan;
pub mod traits;
