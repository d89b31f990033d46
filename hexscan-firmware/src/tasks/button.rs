//! Push-button tasks
//!
//! One task instance per button. The watcher notifies the latch once per
//! accepted edge and then ignores the line for the debounce window.

use defmt::*;
use embassy_time::Delay;

use hexscan_drivers::ButtonWatcher;
use hexscan_hal_rp2040::Rp2040Edge;

use crate::channels::EDGE_LATCH;

/// Button watcher over an RP2040 input
pub type ButtonInput = ButtonWatcher<Rp2040Edge, Delay>;

/// Button task - turns edges into latch notifications
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut watcher: ButtonInput) {
    info!("Button task started: {}", watcher.button());

    loop {
        watcher.next_press(&EDGE_LATCH).await;
        debug!("{} button edge", watcher.button());
    }
}
