//! Cycle guard and step counter.

use crate::config::STEP_COUNT;
use crate::sequencer::SequencerError;

/// Whether a cycle is running, and which step fires next.
///
/// `step` is only meaningful while `active` is true. The only transition
/// from idle to active is [`CycleState::begin`], which refuses to start a
/// second cycle while one is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleState {
    active: bool,
    step: u8,
}

impl CycleState {
    /// Idle state: `{ active: false, step: 0 }`.
    pub const IDLE: Self = Self {
        active: false,
        step: 0,
    };

    /// Returns true while a cycle is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the step that fires next.
    #[inline]
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Returns true once every step of the cycle has fired.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.step >= STEP_COUNT
    }

    /// Marks a cycle active starting at step 0.
    pub(crate) fn begin(&mut self) -> Result<(), SequencerError> {
        if self.active {
            return Err(SequencerError::CycleInProgress);
        }

        self.active = true;
        self.step = 0;
        Ok(())
    }

    /// Moves to the next step.
    pub(crate) fn increment(&mut self) {
        self.step = self.step.saturating_add(1);
    }

    /// Returns to idle.
    pub(crate) fn finish(&mut self) {
        *self = Self::IDLE;
    }

    #[cfg(test)]
    pub(crate) const fn active_at(step: u8) -> Self {
        Self { active: true, step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(CycleState::default(), CycleState::IDLE);
        assert!(!CycleState::IDLE.is_active());
        assert_eq!(CycleState::IDLE.step(), 0);
    }

    #[test]
    fn begin_is_refused_while_active() {
        let mut state = CycleState::IDLE;
        state.begin().unwrap();
        state.increment();

        assert_eq!(state.begin(), Err(SequencerError::CycleInProgress));
        assert_eq!(state.step(), 1);
    }

    #[test]
    fn exhausted_after_last_step() {
        let mut state = CycleState::IDLE;
        state.begin().unwrap();

        for _ in 0..STEP_COUNT - 1 {
            state.increment();
            assert!(!state.is_exhausted());
        }
        state.increment();
        assert!(state.is_exhausted());

        state.finish();
        assert_eq!(state, CycleState::IDLE);
    }
}
