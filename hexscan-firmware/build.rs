//! Build script for hexscan-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates display.toml at compile time, then runs the firmware's own
//!   parser over it so a file that builds is a file the firmware accepts

use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use hexscan_core::config::{parse_config, PinMap};

/// GPIO pins on the RP2040
const GPIO_COUNT: u64 = 30;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml at build time.                 ║\n\
            ║  Please create one in the hexscan-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_buttons(&config, &mut errors);
    validate_pins(&config, &mut errors);

    if errors.is_empty() {
        if let Err(e) = parse_config(&content) {
            errors.push(format!("firmware parser rejects the file: {:?}", e));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Only the known sections may appear
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };
    for (name, value) in table {
        match name.as_str() {
            "display" | "buttons" | "pins" if value.is_table() => {}
            "display" | "buttons" | "pins" => errors.push(format!("[{}] must be a table", name)),
            _ => errors.push(format!("unknown section [{}]", name)),
        }
    }
}

/// Reject keys the firmware parser does not know
fn check_keys(section: &str, table: &toml::Table, known: &[&str], errors: &mut Vec<String>) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };
    check_keys(
        "display",
        display,
        &["frame_us", "bit_order", "common_anode", "initial_digit"],
        errors,
    );

    match display.get("frame_us") {
        Some(toml::Value::Integer(us)) if *us > 0 && *us <= i64::from(u32::MAX) => {}
        Some(_) => errors.push("[display] frame_us must be a positive integer".into()),
        None => {}
    }

    match display.get("bit_order") {
        Some(toml::Value::String(s)) if s == "lsb_first" || s == "msb_first" => {}
        Some(_) => errors.push("[display] bit_order must be \"lsb_first\" or \"msb_first\"".into()),
        None => {}
    }

    if let Some(v) = display.get("common_anode") {
        if !v.is_bool() {
            errors.push("[display] common_anode must be true or false".into());
        }
    }

    match display.get("initial_digit") {
        Some(toml::Value::Integer(n)) if (1..=4).contains(n) => {}
        Some(_) => errors.push("[display] initial_digit must be 1-4".into()),
        None => {}
    }
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(buttons) = config.get("buttons").and_then(|b| b.as_table()) else {
        return;
    };
    check_keys("buttons", buttons, &["edge", "debounce_ms"], errors);

    match buttons.get("edge") {
        Some(toml::Value::String(s)) if s == "rising" || s == "falling" => {}
        Some(_) => errors.push("[buttons] edge must be \"rising\" or \"falling\"".into()),
        None => {}
    }

    match buttons.get("debounce_ms") {
        Some(toml::Value::Integer(ms)) if *ms >= 0 && *ms <= i64::from(u32::MAX) => {}
        Some(_) => errors.push("[buttons] debounce_ms must be a non-negative integer".into()),
        None => {}
    }
}

/// Parse "gpioN" with optional "!" and "^" modifiers
fn parse_pin(s: &str) -> Option<u64> {
    let s = s.trim_start_matches(['!', '^']);
    let digits = s.strip_prefix("gpio")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u64 = digits.parse().ok()?;
    (n < GPIO_COUNT).then_some(n)
}

/// Default assignment as (line name, gpio), in the order the firmware claims
fn default_pins() -> Vec<(String, u64)> {
    let map = PinMap::default();
    let mut pins = vec![
        ("data".to_string(), u64::from(map.data.pin)),
        ("clock".to_string(), u64::from(map.clock.pin)),
        ("latch".to_string(), u64::from(map.latch.pin)),
        ("reset".to_string(), u64::from(map.reset.pin)),
    ];
    for (i, digit) in map.digits.iter().enumerate() {
        pins.push((format!("digits[{}]", i), u64::from(digit.pin)));
    }
    pins.push(("left".to_string(), u64::from(map.left.pin)));
    pins.push(("right".to_string(), u64::from(map.right.pin)));
    pins
}

/// Check pin strings, then overlay them on the defaults and look for
/// collisions; keys left out of the file keep their default pins
fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = config.get("pins").and_then(|p| p.as_table()) else {
        return;
    };
    let mut effective = default_pins();
    check_keys(
        "pins",
        pins,
        &["data", "clock", "latch", "reset", "digits", "left", "right"],
        errors,
    );

    let mut set = |name: String, value: &toml::Value, errors: &mut Vec<String>| {
        let Some(pin) = value.as_str().and_then(parse_pin) else {
            errors.push(format!("[pins] {} must be a pin string like \"gpio2\"", name));
            return;
        };
        if let Some(slot) = effective.iter_mut().find(|(line, _)| *line == name) {
            slot.1 = pin;
        }
    };

    for key in ["data", "clock", "latch", "reset", "left", "right"] {
        if let Some(value) = pins.get(key) {
            set(key.to_string(), value, errors);
        }
    }

    match pins.get("digits") {
        Some(toml::Value::Array(digits)) if digits.len() == 4 => {
            for (i, value) in digits.iter().enumerate() {
                set(format!("digits[{}]", i), value, errors);
            }
        }
        Some(_) => errors.push("[pins] digits must be an array of 4 pin strings".into()),
        None => {}
    }

    let mut used: HashMap<u64, &str> = HashMap::new();
    for (line, pin) in &effective {
        if let Some(other) = used.insert(*pin, line) {
            errors.push(format!("[pins] gpio{} used by both {} and {}", pin, other, line));
        }
    }
}
