//! Shared test infrastructure for oneshot-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use oneshot_sequencer::{LedPattern, RgbLed, Srgb, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.0, 0.0, 0.0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn last_pattern(&self) -> LedPattern {
        LedPattern::from_color(self.current_color)
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_ms(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Active-low button that replays a script of "pressed" readings
///
/// Once the script runs out every read returns `idle_pressed`.
pub struct MockButton {
    script: heapless::Deque<bool, 32>,
    idle_pressed: bool,
    reads: usize,
}

impl MockButton {
    pub fn released() -> Self {
        Self::scripted(&[], false)
    }

    pub fn held() -> Self {
        Self::scripted(&[], true)
    }

    pub fn scripted(pressed: &[bool], idle_pressed: bool) -> Self {
        let mut script = heapless::Deque::new();
        for &reading in pressed {
            script.push_back(reading).unwrap();
        }

        Self {
            script,
            idle_pressed,
            reads: 0,
        }
    }

    pub fn set_idle_pressed(&mut self, pressed: bool) {
        self.idle_pressed = pressed;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    fn next_pressed(&mut self) -> bool {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.idle_pressed)
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.next_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.next_pressed())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay provider that advances a mock time source instead of sleeping
pub struct MockDelay<'a> {
    time_source: &'a MockTimeSource,
    delays_ms: heapless::Vec<u32, 64>,
}

impl<'a> MockDelay<'a> {
    pub fn new(time_source: &'a MockTimeSource) -> Self {
        Self {
            time_source,
            delays_ms: heapless::Vec::new(),
        }
    }

    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.delays_ms.push(ms);
        self.time_source.advance_ms(ms as u64);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
