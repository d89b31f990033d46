//! hexscan Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the display
//! scanner needs. Chip-specific crates provide the implementations, and
//! host tests substitute mocks, so the scan logic never touches registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hexscan-firmware / hexscan-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hexscan-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ hexscan-hal-  │
//! │   adapters    │       │    rp2040     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::OutputPort`] - Digital output lines
//! - [`gpio::EdgeInput`] - Edge-triggered input (interrupt backed)
//! - [`timer::FrameTimer`] - Fixed-period frame pacing

#![no_std]
#![deny(unsafe_code)]

pub mod eh;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use eh::{EhEdge, EhOutput};
pub use gpio::{Edge, EdgeInput, OutputPin, OutputPort};
pub use timer::{FrameTimer, VirtualClock};
