//! Display output drivers

pub mod digits;
pub mod hc595;

pub use digits::DigitLines;
pub use hc595::Hc595;
