//! Hardware timer wrapper for the oneshot-sequencer time traits.
//!
//! Wraps the RP2040 64-bit microsecond timer (using fugit types). The
//! counter does not wrap in practice, so differences saturate instead.

use fugit::{MicrosDurationU64, TimerInstantU64};
use oneshot_sequencer::{TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl Duration {
    /// Converts to the 32-bit countdown the hardware alarms accept.
    pub fn to_alarm_countdown(self) -> fugit::MicrosDurationU32 {
        let micros = self.0.to_micros().min(u32::MAX as u64) as u32;
        fugit::MicrosDurationU32::micros(micros)
    }
}

impl TimeDuration for Duration {
    const ZERO: Self = Duration(MicrosDurationU64::from_ticks(0));

    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }

    fn from_millis(millis: u64) -> Self {
        Duration(MicrosDurationU64::millis(millis))
    }

    fn saturating_sub(self, other: Self) -> Self {
        let result = self.0.to_micros().saturating_sub(other.0.to_micros());
        Duration(MicrosDurationU64::micros(result))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

/// Time source wrapper around RP2040 Timer
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
