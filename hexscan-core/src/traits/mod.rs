//! Hardware abstraction traits
//!
//! These traits define the interface between the scan loop and the
//! drivers that own the actual output lines.

pub mod display;

pub use display::{DigitEnable, SegmentBus};
