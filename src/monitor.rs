//! Debounced button poll that starts cycles.
//!
//! The button is active-low with a pull-up. A press is confirmed by the
//! read-wait-read pattern: the pin must read pressed, then still read
//! pressed [`DEBOUNCE_MS`] later. Only a confirmed press while no cycle is
//! running starts a cycle.

use crate::config::{DEBOUNCE_MS, POLL_INTERVAL_MS};
use crate::led::RgbLed;
use crate::sequencer::OneShotSequencer;
use crate::time::{TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Access to the cycle guard from the poll loop.
///
/// Implemented directly by [`OneShotSequencer`], which then fires its
/// steps from [`CycleControl::service_cycle`] once per poll iteration. When
/// the sequencer is shared with an interrupt handler, implement this on a
/// handle that takes the lock for each call so the lock is never held
/// across the debounce delay, and leave `service_cycle` as a no-op if an
/// alarm fires the steps.
pub trait CycleControl {
    /// Returns true while a cycle is running.
    fn cycle_active(&mut self) -> bool;

    /// Starts a cycle. Returns false if one was already running.
    fn start_cycle(&mut self) -> bool;

    /// Fires the next step of a running cycle if it is due.
    fn service_cycle(&mut self) {}
}

impl<I: TimeInstant, L: RgbLed, T: TimeSource<I>> CycleControl for OneShotSequencer<'_, I, L, T> {
    fn cycle_active(&mut self) -> bool {
        self.is_active()
    }

    fn start_cycle(&mut self) -> bool {
        self.start().is_ok()
    }

    fn service_cycle(&mut self) {
        if self.is_active() {
            let _ = self.service();
        }
    }
}

/// Result of one poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Button not pressed.
    Released,
    /// Button pressed but a cycle is running; the press is ignored.
    Busy,
    /// Button read pressed once but not on the confirming read.
    Bounced,
    /// Press confirmed and a cycle was started.
    Triggered,
}

/// Polls an active-low button and starts cycles on confirmed presses.
pub struct InputMonitor<P: InputPin, D: DelayNs> {
    button: P,
    delay: D,
}

impl<P: InputPin, D: DelayNs> InputMonitor<P, D> {
    /// Creates a monitor for a pulled-up, active-low button.
    pub fn new(button: P, delay: D) -> Self {
        Self { button, delay }
    }

    /// Runs one poll iteration.
    ///
    /// Blocks for [`DEBOUNCE_MS`] only when the first read is pressed and no
    /// cycle is running.
    pub fn poll<C: CycleControl>(&mut self, control: &mut C) -> PollOutcome {
        if !self.is_pressed() {
            return PollOutcome::Released;
        }

        if control.cycle_active() {
            return PollOutcome::Busy;
        }

        self.delay.delay_ms(DEBOUNCE_MS);

        if !self.is_pressed() {
            return PollOutcome::Bounced;
        }

        // The guard may have been taken during the debounce wait.
        if control.start_cycle() {
            PollOutcome::Triggered
        } else {
            PollOutcome::Busy
        }
    }

    /// Sleeps until the next poll iteration is due.
    pub fn wait_next_poll(&mut self) {
        self.delay.delay_ms(POLL_INTERVAL_MS);
    }

    /// Runs one full loop iteration: poll, service the cycle, then sleep.
    pub fn tick<C: CycleControl>(&mut self, control: &mut C) -> PollOutcome {
        let outcome = self.poll(control);
        control.service_cycle();
        self.wait_next_poll();
        outcome
    }

    /// Polls forever.
    pub fn run<C: CycleControl>(&mut self, control: &mut C) -> ! {
        loop {
            self.tick(control);
        }
    }

    /// Releases the button pin and delay provider.
    pub fn free(self) -> (P, D) {
        (self.button, self.delay)
    }

    // A failed read counts as not pressed.
    fn is_pressed(&mut self) -> bool {
        self.button.is_low().unwrap_or(false)
    }
}
