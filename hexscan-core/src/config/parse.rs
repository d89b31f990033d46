//! Simple TOML parser for the display configuration
//!
//! Handles only the subset `display.toml` needs. It does NOT support the
//! full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Basic ("...") and literal ('...') strings
//! - [section] headers
//! - Single-line arrays of strings: digits = ["gpio6", "gpio7"]
//! - Comments (# ...), including after a header or value
//!
//! NOT supported:
//! - Multi-line strings or arrays
//! - Nested tables
//! - Dotted keys

use hexscan_hal::Edge;

use super::types::{BitOrder, DisplayConfig, PinConfig};
use crate::digit::{Digit, DIGIT_COUNT};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type or out-of-range value
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Key not recognized in its section
    UnknownKey,
    /// Same GPIO assigned to two lines
    DuplicatePin(u8),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Buttons,
    Pins,
}

/// Parse TOML text into a validated [`DisplayConfig`]
///
/// Keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    validate(&config)?;
    Ok(config)
}

/// Check cross-field constraints
pub fn validate(config: &DisplayConfig) -> Result<(), ParseError> {
    if config.frame_us == 0 {
        return Err(ParseError::InvalidValue);
    }
    if let Some(pin) = config.pins.find_duplicate() {
        return Err(ParseError::DuplicatePin(pin));
    }
    Ok(())
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "buttons" => Ok(Section::Buttons),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Display => match key {
            "frame_us" => config.frame_us = parse_int(value)?,
            "bit_order" => config.bit_order = parse_bit_order(value)?,
            "common_anode" => config.common_anode = parse_bool(value)?,
            "initial_digit" => {
                config.initial_digit =
                    Digit::from_number(parse_int(value)?).ok_or(ParseError::InvalidValue)?
            }
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Buttons => match key {
            "edge" => config.buttons.edge = parse_edge(value)?,
            "debounce_ms" => config.buttons.debounce_ms = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Pins => {
            let pins = &mut config.pins;
            match key {
                "data" => pins.data = parse_pin(value)?,
                "clock" => pins.clock = parse_pin(value)?,
                "latch" => pins.latch = parse_pin(value)?,
                "reset" => pins.reset = parse_pin(value)?,
                "digits" => pins.digits = parse_pin_array(value)?,
                "left" => pins.left = parse_pin(value)?,
                "right" => pins.right = parse_pin(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
    }
    Ok(())
}

/// Cut a trailing `# comment`, ignoring `#` inside quoted strings
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '#') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line (comments already stripped)
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes `"` or `'` quotes)
fn parse_string(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    // Allow unquoted strings for simple values
    value
}

/// Parse a non-negative integer, allowing `_` digit separators
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let mut acc: u32 = 0;
    let mut seen_digit = false;

    for c in value.chars() {
        match c {
            '_' if seen_digit => {}
            '0'..='9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(c as u32 - '0' as u32))
                    .ok_or(ParseError::InvalidValue)?;
                seen_digit = true;
            }
            _ => return Err(ParseError::InvalidValue),
        }
    }

    if !seen_digit {
        return Err(ParseError::InvalidValue);
    }
    T::try_from(acc).map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_bit_order(value: &str) -> Result<BitOrder, ParseError> {
    match parse_string(value) {
        "lsb_first" => Ok(BitOrder::LsbFirst),
        "msb_first" => Ok(BitOrder::MsbFirst),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_edge(value: &str) -> Result<Edge, ParseError> {
    match parse_string(value) {
        "rising" => Ok(Edge::Rising),
        "falling" => Ok(Edge::Falling),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
pub fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull_up = false;

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let digits = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPin);
    }
    let pin = digits.parse().map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}

/// Parse `["gpio6", "gpio7", "gpio8", "gpio9"]`
fn parse_pin_array(value: &str) -> Result<[PinConfig; DIGIT_COUNT], ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut pins = [PinConfig::default(); DIGIT_COUNT];
    let mut count = 0;

    for item in inner.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let slot = pins.get_mut(count).ok_or(ParseError::InvalidValue)?;
        *slot = parse_pin(item)?;
        count += 1;
    }

    if count != DIGIT_COUNT {
        return Err(ParseError::InvalidValue);
    }
    Ok(pins)
}
