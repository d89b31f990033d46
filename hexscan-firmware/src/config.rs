//! Embedded display configuration
//!
//! The config text is compiled in, and build.rs refuses to build unless
//! [`parse_config`] accepts it. The fallback below only guards against a
//! file swapped in without a rebuild of the build script.

use defmt::*;

use hexscan_core::config::{parse_config, DisplayConfig, PinConfig};

/// Parse the embedded config, falling back to defaults on error
pub fn load(text: &str) -> DisplayConfig {
    match parse_config(text) {
        Ok(config) => {
            info!("Loaded embedded display.toml");
            config
        }
        Err(e) => {
            error!("display.toml rejected: {}", e);
            warn!("Using default display configuration");
            DisplayConfig::default()
        }
    }
}

/// Log the effective configuration
pub fn log_summary(config: &DisplayConfig) {
    info!(
        "Display: {} us/frame, {}, common_anode={}, start on digit {}",
        config.frame_us,
        config.bit_order,
        config.common_anode,
        config.initial_digit.number()
    );
    info!(
        "Buttons: {} edge, {} ms debounce",
        config.buttons.edge, config.buttons.debounce_ms
    );

    let pins = &config.pins;
    log_pin("data", pins.data);
    log_pin("clock", pins.clock);
    log_pin("latch", pins.latch);
    log_pin("reset", pins.reset);
    for (i, pin) in pins.digits.iter().enumerate() {
        info!("  digit{} -> gpio{}{}", i + 1, pin.pin, flags(*pin));
    }
    log_pin("left", pins.left);
    log_pin("right", pins.right);
}

fn log_pin(name: &str, pin: PinConfig) {
    info!("  {} -> gpio{}{}", name, pin.pin, flags(pin));
}

fn flags(pin: PinConfig) -> &'static str {
    match (pin.inverted, pin.pull_up) {
        (false, false) => "",
        (true, false) => " (active-low)",
        (false, true) => " (pull-up)",
        (true, true) => " (active-low, pull-up)",
    }
}
