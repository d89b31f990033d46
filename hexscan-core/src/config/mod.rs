//! Configuration types and parsing
//!
//! The firmware embeds a small TOML file; [`parse_config`] turns it into a
//! [`DisplayConfig`]. Absent keys keep their defaults.

pub mod parse;
pub mod types;

pub use parse::{parse_config, parse_pin, validate, ParseError};
pub use types::{
    BitOrder, ButtonConfig, DisplayConfig, PinConfig, PinMap, DEFAULT_DEBOUNCE_MS,
    DEFAULT_FRAME_US,
};
