//! One-shot LED sequencer with guard and timing control.
//!
//! Provides [`OneShotSequencer`] which runs a single LED through one fixed
//! four-step cycle per trigger. Each firing clears the outputs, applies the
//! pattern for the current step and either asks to be fired again after
//! [`STEP_DWELL_MS`] or declares the cycle complete.

use crate::command::SequencerAction;
use crate::config::STEP_DWELL_MS;
use crate::cycle::CycleState;
use crate::led::RgbLed;
use crate::pattern::{COLOR_OFF, LedPattern, pattern_for_step};
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Timing information returned by sequencer operations.
///
/// Indicates when the sequencer needs to fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Steps remain. Fire again after the specified delay.
    ///
    /// When driving the sequencer from a one-shot alarm, schedule the alarm
    /// for exactly this duration and call [`OneShotSequencer::advance`] when
    /// it fires.
    Delay(D),

    /// The cycle has completed and the sequencer is idle again.
    ///
    /// Nothing needs to be scheduled until the next trigger.
    Complete,
}

/// Errors that can occur during sequencer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// A cycle is already running; the trigger is ignored.
    CycleInProgress,
    /// No cycle is running, so there is no step to fire.
    NoActiveCycle,
}

impl core::fmt::Display for SequencerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequencerError::CycleInProgress => write!(f, "a cycle is already in progress"),
            SequencerError::NoActiveCycle => write!(f, "no cycle is active"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequencerError {}

/// Runs an LED through one fixed cycle per trigger.
///
/// The sequencer explicitly owns the cycle state. Every mutation takes
/// `&mut self`, so when a poll loop and an interrupt handler both need it,
/// the caller must put it behind a lock such as
/// `critical_section::Mutex<RefCell<_>>`.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
pub struct OneShotSequencer<'t, I: TimeInstant, L: RgbLed, T: TimeSource<I>> {
    led: L,
    time_source: &'t T,
    state: CycleState,
    last_fire: Option<I>,
    current_pattern: LedPattern,
}

impl<'t, I: TimeInstant, L: RgbLed, T: TimeSource<I>> OneShotSequencer<'t, I, L, T> {
    /// Creates a new idle sequencer with the LED turned off.
    pub fn new(mut led: L, time_source: &'t T) -> Self {
        led.set_color(COLOR_OFF);

        Self {
            led,
            time_source,
            state: CycleState::IDLE,
            last_fire: None,
            current_pattern: LedPattern::OFF,
        }
    }

    /// Handles a sequencer action by dispatching to the appropriate method.
    pub fn handle_action(
        &mut self,
        action: SequencerAction,
    ) -> Result<ServiceTiming<I::Duration>, SequencerError> {
        match action {
            SequencerAction::Start => self.start(),
            SequencerAction::Advance => self.advance(),
            SequencerAction::Service => self.service(),
        }
    }

    /// Starts a cycle and fires its first step immediately.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay(_))` - First step applied, fire again after this delay
    /// * `Err(SequencerError::CycleInProgress)` - A cycle is running; nothing changes
    pub fn start(&mut self) -> Result<ServiceTiming<I::Duration>, SequencerError> {
        self.state.begin()?;

        #[cfg(feature = "defmt")]
        defmt::info!("cycle started");

        self.advance()
    }

    /// Fires the current step.
    ///
    /// Clears all outputs, applies the pattern for the current step, then
    /// moves to the next step. Out-of-range steps set no outputs but still
    /// count towards completion.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay(_))` - Steps remain, fire again after this delay
    /// * `Ok(ServiceTiming::Complete)` - Last step fired, sequencer is idle
    /// * `Err(SequencerError::NoActiveCycle)` - Called while idle
    pub fn advance(&mut self) -> Result<ServiceTiming<I::Duration>, SequencerError> {
        if !self.state.is_active() {
            return Err(SequencerError::NoActiveCycle);
        }

        self.led.set_color(COLOR_OFF);
        self.current_pattern = LedPattern::OFF;

        if let Some(pattern) = pattern_for_step(self.state.step()) {
            self.led.set_color(pattern.to_color());
            self.current_pattern = pattern;
        }

        self.state.increment();

        if self.state.is_exhausted() {
            #[cfg(feature = "defmt")]
            defmt::info!("cycle complete");

            self.state.finish();
            self.last_fire = None;
            return Ok(ServiceTiming::Complete);
        }

        // Each firing is timed from itself, so drift accumulates.
        self.last_fire = Some(self.time_source.now());
        Ok(ServiceTiming::Delay(I::Duration::from_millis(STEP_DWELL_MS)))
    }

    /// Fires the next step if its delay has elapsed.
    ///
    /// Use this instead of a one-shot alarm when the sequencer is driven
    /// from a periodic tick or a poll loop.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay(_))` - Time left until the next step
    /// * `Ok(ServiceTiming::Complete)` - Last step fired, sequencer is idle
    /// * `Err(SequencerError::NoActiveCycle)` - Called while idle
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, SequencerError> {
        match self.time_until_next_step() {
            None => Err(SequencerError::NoActiveCycle),
            Some(remaining) if remaining == I::Duration::ZERO => self.advance(),
            Some(remaining) => Ok(ServiceTiming::Delay(remaining)),
        }
    }

    /// Returns the time left before the next step is due, if a cycle is active.
    pub fn time_until_next_step(&self) -> Option<I::Duration> {
        if !self.state.is_active() {
            return None;
        }

        let last_fire = self.last_fire?;
        let elapsed = self.time_source.now().duration_since(last_fire);
        Some(I::Duration::from_millis(STEP_DWELL_MS).saturating_sub(elapsed))
    }

    /// Returns the current cycle state.
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Returns true while a cycle is in progress.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the step that fires next.
    pub fn step(&self) -> u8 {
        self.state.step()
    }

    /// Returns the pattern currently shown on the LED.
    pub fn current_pattern(&self) -> LedPattern {
        self.current_pattern
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }
}
