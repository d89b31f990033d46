//! hexscan - four-digit hex display firmware
//!
//! Main firmware binary for RP2040 boards. Scans a seven-segment display
//! through a 74HC595, cycling the glyphs 0..F, while two push-buttons move
//! the lit digit left and right. Pin assignment comes from the embedded
//! `display.toml`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use hexscan_core::config::DisplayConfig;
use hexscan_core::latch::Button;
use hexscan_core::scan::DisplayScanner;
use hexscan_drivers::{ButtonWatcher, DigitLines, Hc595};
use hexscan_hal_rp2040::{check_pin_map, edge_input, output, PinBank, PinError};

use crate::tasks::{ButtonInput, Scanner};

mod channels;
mod config;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("hexscan firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);
    config::log_summary(&config);

    let mut bank = PinBank::new(p);
    let (scanner, left, right) = match claim_hardware(&mut bank, &config) {
        Ok(hw) => hw,
        Err(e) => defmt::panic!("Pin setup failed: {}", e),
    };
    info!("Pins claimed");

    spawner.spawn(unwrap!(tasks::scan_task(scanner, config.frame_us)));
    spawner.spawn(unwrap!(tasks::button_task(left)));
    spawner.spawn(unwrap!(tasks::button_task(right)));

    info!("All tasks spawned");
}

/// Take every configured pin and build the display and button drivers
fn claim_hardware(
    bank: &mut PinBank,
    config: &DisplayConfig,
) -> Result<(Scanner, ButtonInput, ButtonInput), PinError> {
    let pins = &config.pins;
    let used = check_pin_map(pins)?;
    debug!("Pin map uses {} GPIOs", used);

    let bus = Hc595::new(
        output(bank, pins.data)?,
        output(bank, pins.clock)?,
        output(bank, pins.latch)?,
        output(bank, pins.reset)?,
        config.bit_order,
        config.common_anode,
    );

    let digits = DigitLines::new([
        output(bank, pins.digits[0])?,
        output(bank, pins.digits[1])?,
        output(bank, pins.digits[2])?,
        output(bank, pins.digits[3])?,
    ]);

    let buttons = &config.buttons;
    let left = ButtonWatcher::new(
        edge_input(bank, pins.left)?,
        Delay,
        Button::Left,
        buttons.edge,
        buttons.debounce_ms,
    );
    let right = ButtonWatcher::new(
        edge_input(bank, pins.right)?,
        Delay,
        Button::Right,
        buttons.edge,
        buttons.debounce_ms,
    );

    let scanner = DisplayScanner::new(bus, digits, config.initial_digit);
    Ok((scanner, left, right))
}
