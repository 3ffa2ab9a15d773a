//! Command-based control for the sequencer.

/// Actions for controlling a [`OneShotSequencer`](crate::OneShotSequencer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerAction {
    /// Start a cycle if none is running.
    Start,
    /// Fire the current step now (one-shot alarm expired).
    Advance,
    /// Fire the current step only if its delay has elapsed.
    Service,
}
