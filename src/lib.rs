#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`OneShotSequencer`**: Runs one four-step LED cycle per trigger, then returns to idle
//! - **`CycleState`**: The `{ active, step }` guard and step counter owned by the sequencer
//! - **`LedPattern`**: Green/blue/red on-off pattern for one step
//! - **`InputMonitor`**: Debounced active-low button poll that starts cycles
//! - **`CycleControl`**: Seam between the monitor and however the sequencer is shared
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`SequencerAction`**: Commands that can be sent to control the sequencer
//!
//! A cycle is driven either by a deferred one-shot alarm calling
//! [`OneShotSequencer::advance`] each time it fires, or by calling
//! [`OneShotSequencer::service`] from a periodic tick. Both produce the same
//! output sequence.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod command;
pub mod config;
pub mod cycle;
pub mod led;
pub mod monitor;
pub mod pattern;
pub mod sequencer;
pub mod time;

pub use command::SequencerAction;
pub use cycle::CycleState;
pub use led::{DigitalRgbLed, RgbLed};
pub use monitor::{CycleControl, InputMonitor, PollOutcome};
pub use pattern::{COLOR_OFF, LedPattern, MAGENTA, RED, STEP_PATTERNS, WHITE, pattern_for_step};
pub use sequencer::{OneShotSequencer, SequencerError, ServiceTiming};
pub use time::{TimeDuration, TimeInstant, TimeSource};
