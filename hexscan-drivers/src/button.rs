//! Push-button edge watcher
//!
//! Waits for the configured edge on one input and records it in the shared
//! [`ButtonEdgeLatch`]. Waiting on the edge consumes the pending interrupt,
//! so one physical edge produces at most one notify. After a notify the
//! line is left unarmed for the debounce window, so contact bounce inside
//! the window is never seen.

use embedded_hal_async::delay::DelayNs;
use hexscan_core::latch::{Button, ButtonEdgeLatch};
use hexscan_hal::{Edge, EdgeInput};

/// Turns edges on one input into latch notifications
pub struct ButtonWatcher<I, D> {
    input: I,
    delay: D,
    button: Button,
    edge: Edge,
    /// Lockout after each accepted edge; 0 disables it
    debounce_ms: u32,
}

impl<I: EdgeInput, D: DelayNs> ButtonWatcher<I, D> {
    pub fn new(input: I, delay: D, button: Button, edge: Edge, debounce_ms: u32) -> Self {
        Self {
            input,
            delay,
            button,
            edge,
            debounce_ms,
        }
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Wait for the next press, notify the latch, then sit out the lockout
    pub async fn next_press(&mut self, latch: &ButtonEdgeLatch) {
        self.input.wait_for_edge(self.edge).await;
        latch.notify(self.button);

        if self.debounce_ms > 0 {
            self.delay.delay_ms(self.debounce_ms).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use heapless::Vec;
    use std::rc::Rc;

    /// Shared virtual time in milliseconds
    type Now = Rc<Cell<u32>>;

    /// Edge input replaying timestamped edges
    ///
    /// A wait only sees edges at or after the current virtual time, like an
    /// interrupt that is armed when the wait starts.
    struct ScriptedInput {
        edges: Vec<u32, 16>,
        next: usize,
        now: Now,
        waited: Option<Edge>,
        seen: Vec<u32, 16>,
    }

    impl ScriptedInput {
        fn new(edges: &[u32], now: &Now) -> Self {
            Self {
                edges: Vec::from_slice(edges).unwrap(),
                next: 0,
                now: Rc::clone(now),
                waited: None,
                seen: Vec::new(),
            }
        }
    }

    impl EdgeInput for ScriptedInput {
        async fn wait_for_edge(&mut self, edge: Edge) {
            self.waited = Some(edge);
            while self.edges[self.next] < self.now.get() {
                self.next += 1;
            }
            let at = self.edges[self.next];
            self.next += 1;
            self.now.set(at);
            self.seen.push(at).unwrap();
        }
    }

    /// Delay that advances virtual time instead of sleeping
    struct VirtualDelay {
        now: Now,
    }

    impl DelayNs for VirtualDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.now.set(self.now.get() + ns / 1_000_000);
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.now.set(self.now.get() + ms);
        }
    }

    fn watcher(
        edges: &[u32],
        button: Button,
        edge: Edge,
        debounce_ms: u32,
    ) -> (ButtonWatcher<ScriptedInput, VirtualDelay>, Now) {
        let now: Now = Rc::new(Cell::new(0));
        let input = ScriptedInput::new(edges, &now);
        let delay = VirtualDelay {
            now: Rc::clone(&now),
        };
        (
            ButtonWatcher::new(input, delay, button, edge, debounce_ms),
            now,
        )
    }

    #[test]
    fn test_press_notifies_its_button() {
        let latch = ButtonEdgeLatch::new();
        let (mut w, _now) = watcher(&[3], Button::Right, Edge::Falling, 20);

        block_on(w.next_press(&latch));

        assert_eq!(w.input.waited, Some(Edge::Falling));
        assert!(latch.take_and_clear(Button::Right));
        assert!(!latch.take_and_clear(Button::Left));
    }

    #[test]
    fn test_bounces_inside_window_are_ignored() {
        let latch = ButtonEdgeLatch::new();
        let (mut w, now) = watcher(&[0, 2, 5, 19, 50, 53], Button::Left, Edge::Rising, 20);

        block_on(w.next_press(&latch));
        assert!(latch.take_and_clear(Button::Left));
        assert_eq!(now.get(), 20);

        // Edges at 2, 5 and 19 fell inside the lockout; the next press is 50
        block_on(w.next_press(&latch));
        assert!(latch.take_and_clear(Button::Left));
        assert!(!latch.take_and_clear(Button::Left));

        assert_eq!(w.input.seen.as_slice(), &[0, 50]);
        assert_eq!(now.get(), 70);
    }

    #[test]
    fn test_zero_debounce_sees_every_edge() {
        let latch = ButtonEdgeLatch::new();
        let (mut w, now) = watcher(&[0, 2, 5], Button::Left, Edge::Rising, 0);

        for _ in 0..3 {
            block_on(w.next_press(&latch));
            assert!(latch.take_and_clear(Button::Left));
        }

        assert_eq!(w.input.seen.as_slice(), &[0, 2, 5]);
        assert_eq!(now.get(), 5);
    }

    #[test]
    fn test_edges_collapse_until_taken() {
        let latch = ButtonEdgeLatch::new();
        let (mut w, _now) = watcher(&[0, 40], Button::Left, Edge::Rising, 20);

        block_on(async {
            w.next_press(&latch).await;
            w.next_press(&latch).await;
        });

        // Both presses collapse into one pending flag
        assert!(latch.take_and_clear(Button::Left));
        assert!(!latch.take_and_clear(Button::Left));
    }
}
