//! End-to-end scan tests: core scanner, 74HC595 driver and digit lines over
//! recording pins, with a software model of the shift register.

use std::cell::RefCell;
use std::rc::Rc;

use embassy_futures::block_on;
use heapless::Vec;
use hexscan_core::config::BitOrder;
use hexscan_core::digit::Digit;
use hexscan_core::glyph::encode;
use hexscan_core::latch::{Button, ButtonEdgeLatch};
use hexscan_core::scan::DisplayScanner;
use hexscan_drivers::{DigitLines, Hc595};
use hexscan_hal::{OutputPin, VirtualClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Data,
    Clock,
    Latch,
    Reset,
    Digit(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Event {
    line: Line,
    high: bool,
}

type Log = Rc<RefCell<Vec<Event, 4096>>>;

struct LoggedPin {
    line: Line,
    high: bool,
    log: Log,
}

impl LoggedPin {
    fn new(line: Line, log: &Log) -> Self {
        Self {
            line,
            high: false,
            log: Rc::clone(log),
        }
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        let _ = self.log.borrow_mut().push(Event {
            line: self.line,
            high,
        });
    }
}

impl OutputPin for LoggedPin {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

type Scanner = DisplayScanner<Hc595<LoggedPin>, DigitLines<[LoggedPin; 4]>>;

fn rig(order: BitOrder) -> (Scanner, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let bus = Hc595::new(
        LoggedPin::new(Line::Data, &log),
        LoggedPin::new(Line::Clock, &log),
        LoggedPin::new(Line::Latch, &log),
        LoggedPin::new(Line::Reset, &log),
        order,
        true,
    );
    let digits = DigitLines::new([
        LoggedPin::new(Line::Digit(0), &log),
        LoggedPin::new(Line::Digit(1), &log),
        LoggedPin::new(Line::Digit(2), &log),
        LoggedPin::new(Line::Digit(3), &log),
    ]);
    let scanner = DisplayScanner::new(bus, digits, Digit::Digit1);
    log.borrow_mut().clear();
    (scanner, log)
}

/// Software 74HC595: data enters Q0 on each clock rise, storage copies on
/// latch rise, reset low clears the shift stage.
#[derive(Default)]
struct Register {
    data: bool,
    clock: bool,
    latch: bool,
    shift: u8,
    storage: u8,
    digits: [bool; 4],
    clocks: usize,
    latches: usize,
}

impl Register {
    fn replay(&mut self, events: &[Event]) {
        for ev in events {
            match ev.line {
                Line::Data => self.data = ev.high,
                Line::Clock => {
                    if ev.high && !self.clock {
                        self.shift = (self.shift << 1) | u8::from(self.data);
                        self.clocks += 1;
                    }
                    self.clock = ev.high;
                }
                Line::Latch => {
                    if ev.high && !self.latch {
                        self.storage = self.shift;
                        self.latches += 1;
                    }
                    self.latch = ev.high;
                }
                Line::Reset => {
                    if !ev.high {
                        self.shift = 0;
                    }
                }
                Line::Digit(n) => self.digits[n as usize] = ev.high,
            }
        }
    }

    /// Level on output `Qn`
    fn q(&self, n: u8) -> bool {
        (self.storage >> n) & 1 != 0
    }

    fn lit_digit(&self) -> Option<usize> {
        let mut lit = self.digits.iter().enumerate().filter(|(_, on)| **on);
        let first = lit.next().map(|(i, _)| i);
        assert!(lit.next().is_none(), "more than one digit enabled");
        first
    }
}

fn drain(log: &Log) -> std::vec::Vec<Event> {
    let mut log = log.borrow_mut();
    let events = log.iter().copied().collect();
    log.clear();
    events
}

#[test]
fn startup_resets_then_enables_first_digit() {
    let (mut scanner, log) = rig(BitOrder::LsbFirst);
    scanner.start();

    let events = drain(&log);
    assert_eq!(
        &events[..2],
        &[
            Event { line: Line::Reset, high: false },
            Event { line: Line::Reset, high: true },
        ]
    );

    let mut reg = Register::default();
    reg.replay(&events);
    assert_eq!(reg.lit_digit(), Some(0));
    assert_eq!(reg.latches, 0);
}

#[test]
fn left_press_wraps_to_last_digit() {
    let (mut scanner, log) = rig(BitOrder::LsbFirst);
    let latch = ButtonEdgeLatch::new();
    scanner.start();
    drain(&log);

    latch.notify(Button::Left);
    scanner.step(&latch);
    let events = drain(&log);

    assert_eq!(scanner.position(), Digit::Digit4);

    let data: std::vec::Vec<bool> = events
        .iter()
        .filter(|e| e.line == Line::Data)
        .map(|e| e.high)
        .collect();
    // Value 0 is 0x7E; active-low on the wire is 0x01, sent bit 0 first
    assert_eq!(data, [true, false, false, false, false, false, false]);

    let mut reg = Register::default();
    reg.replay(&events);
    assert_eq!(reg.lit_digit(), Some(3));
}

#[test]
fn simultaneous_presses_left_wins_right_cleared() {
    let (mut scanner, _log) = rig(BitOrder::LsbFirst);
    let latch = ButtonEdgeLatch::new();
    scanner.start();

    latch.notify(Button::Left);
    latch.notify(Button::Right);
    scanner.step(&latch);
    assert_eq!(scanner.position(), Digit::Digit4);

    // The right edge was dropped, not deferred
    scanner.step(&latch);
    assert_eq!(scanner.position(), Digit::Digit4);

    // A fresh right press still registers
    latch.notify(Button::Right);
    scanner.step(&latch);
    assert_eq!(scanner.position(), Digit::Digit1);
}

#[test]
fn every_frame_clocks_seven_bits_then_latches_once() {
    let (mut scanner, log) = rig(BitOrder::LsbFirst);
    let latch = ButtonEdgeLatch::new();
    scanner.start();
    drain(&log);

    for _ in 0..20 {
        scanner.step(&latch);
        let events = drain(&log);

        let mut reg = Register::default();
        reg.replay(&events);
        assert_eq!(reg.clocks, 7);
        assert_eq!(reg.latches, 1);

        let last_clock = events
            .iter()
            .rposition(|e| e.line == Line::Clock && e.high)
            .unwrap();
        let latch_rise = events
            .iter()
            .position(|e| e.line == Line::Latch && e.high)
            .unwrap();
        assert!(latch_rise > last_clock);
    }
}

#[test]
fn register_outputs_show_each_glyph() {
    let (mut scanner, log) = rig(BitOrder::LsbFirst);
    let latch = ButtonEdgeLatch::new();
    let mut clock = VirtualClock::new(62_500);
    scanner.start();

    let mut reg = Register::default();
    reg.replay(&drain(&log));

    for value in 0..16u8 {
        block_on(scanner.run_frames(&latch, &mut clock, 1, |_| {}));
        reg.replay(&drain(&log));

        // LSB-first leaves segment a on Q0 through segment g on Q6
        let expected = encode(value);
        for (q, bit) in (0..7u8).zip((0..7u8).rev()) {
            let segment_lit = expected.bit(bit);
            assert_eq!(reg.q(q), !segment_lit, "value {:X} Q{}", value, q);
        }
    }
    assert_eq!(clock.elapsed_us(), 1_000_000);
}

#[test]
fn msb_first_reverses_output_order() {
    let (mut scanner, log) = rig(BitOrder::MsbFirst);
    let latch = ButtonEdgeLatch::new();
    scanner.start();
    drain(&log);

    scanner.step(&latch);
    let mut reg = Register::default();
    reg.replay(&drain(&log));

    // Bit n of the wire pattern lands on Qn
    assert_eq!(reg.storage & 0x7F, encode(0).active_low());
}
