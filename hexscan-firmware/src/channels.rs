//! State shared between tasks
//!
//! Button tasks only ever set a flag; the scan task consumes the flags once
//! per frame. No queue: a second press before the next frame is absorbed.

use hexscan_core::latch::ButtonEdgeLatch;

/// Pending button edges, written by the button tasks, read by the scan task
pub static EDGE_LATCH: ButtonEdgeLatch = ButtonEdgeLatch::new();
