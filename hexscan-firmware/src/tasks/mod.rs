//! Embassy async tasks
//!
//! The scan task owns the display outputs; each button task owns one
//! input. They share only the edge latch in `channels`.

pub mod button;
pub mod scan;

pub use button::{button_task, ButtonInput};
pub use scan::{scan_task, Scanner};
