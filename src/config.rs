//! Compile-time configuration.
//!
//! Timing parameters for the input poll and the LED cycle live here so they
//! can be tuned in one place. There is no runtime configuration.

// Input

/// Settle time between the first "pressed" read and the confirming read (ms).
pub const DEBOUNCE_MS: u32 = 100;

/// Sleep between poll iterations (ms). Upper bound on trigger latency.
pub const POLL_INTERVAL_MS: u32 = 10;

// Cycle

/// Time each step is held before the next one fires (ms).
pub const STEP_DWELL_MS: u64 = 3000;

/// Number of steps in one cycle.
pub const STEP_COUNT: u8 = 4;
