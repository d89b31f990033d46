//! Display scan loop
//!
//! One frame pushes a glyph through the segment bus, applies any pending
//! button shift, drives the digit enables and latches. The loop is paced by
//! a [`FrameTimer`](hexscan_hal::FrameTimer).

mod scanner;

pub use scanner::{DisplayScanner, FrameReport};
