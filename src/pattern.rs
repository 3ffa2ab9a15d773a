//! Step-to-output mapping for the one-shot cycle.
//!
//! Each step of a cycle drives the green, blue and red outputs to a fixed
//! on/off pattern. Patterns convert to `Srgb` so any [`RgbLed`](crate::RgbLed)
//! implementation, digital or PWM, can display them.

use crate::config::STEP_COUNT;
use palette::Srgb;

/// All channels off.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
/// Green, blue and red on.
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
/// Blue and red on.
pub const MAGENTA: Srgb = Srgb::new(1.0, 0.0, 1.0);
/// Red only.
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

/// On/off state of the three LED outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    /// Green output on.
    pub green: bool,
    /// Blue output on.
    pub blue: bool,
    /// Red output on.
    pub red: bool,
}

impl LedPattern {
    /// All outputs off.
    pub const OFF: Self = Self::new(false, false, false);

    /// Creates a pattern in green, blue, red order.
    #[inline]
    pub const fn new(green: bool, blue: bool, red: bool) -> Self {
        Self { green, blue, red }
    }

    /// Returns true if no output is on.
    #[inline]
    pub const fn is_off(&self) -> bool {
        !self.green && !self.blue && !self.red
    }

    /// Converts to a full-brightness color with each lit channel at 1.0.
    pub fn to_color(self) -> Srgb {
        fn level(on: bool) -> f32 {
            if on { 1.0 } else { 0.0 }
        }

        Srgb::new(level(self.red), level(self.green), level(self.blue))
    }

    /// Thresholds a color back to on/off outputs (on at 0.5 and above).
    pub fn from_color(color: Srgb) -> Self {
        Self::new(color.green >= 0.5, color.blue >= 0.5, color.red >= 0.5)
    }
}

impl From<LedPattern> for Srgb {
    fn from(pattern: LedPattern) -> Self {
        pattern.to_color()
    }
}

/// Output pattern for each step of a cycle, indexed by step.
pub const STEP_PATTERNS: [LedPattern; STEP_COUNT as usize] = [
    LedPattern::new(true, true, true),
    LedPattern::new(false, true, true),
    LedPattern::new(false, false, true),
    LedPattern::OFF,
];

/// Looks up the pattern for `step`.
///
/// Returns `None` for steps outside the table; callers set no outputs in
/// that case and carry on with the cycle.
#[inline]
pub fn pattern_for_step(step: u8) -> Option<LedPattern> {
    STEP_PATTERNS.get(step as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_green_blue_red_order() {
        assert_eq!(pattern_for_step(0), Some(LedPattern::new(true, true, true)));
        assert_eq!(pattern_for_step(1), Some(LedPattern::new(false, true, true)));
        assert_eq!(pattern_for_step(2), Some(LedPattern::new(false, false, true)));
        assert_eq!(pattern_for_step(3), Some(LedPattern::OFF));
    }

    #[test]
    fn out_of_range_steps_have_no_pattern() {
        assert_eq!(pattern_for_step(STEP_COUNT), None);
        assert_eq!(pattern_for_step(u8::MAX), None);
    }

    #[test]
    fn patterns_map_to_named_colors() {
        assert_eq!(STEP_PATTERNS[0].to_color(), WHITE);
        assert_eq!(STEP_PATTERNS[1].to_color(), MAGENTA);
        assert_eq!(STEP_PATTERNS[2].to_color(), RED);
        assert_eq!(STEP_PATTERNS[3].to_color(), COLOR_OFF);
    }

    #[test]
    fn from_color_thresholds_each_channel() {
        let dim = Srgb::new(0.49, 0.5, 0.9);
        assert_eq!(LedPattern::from_color(dim), LedPattern::new(true, true, false));

        for pattern in STEP_PATTERNS {
            assert_eq!(LedPattern::from_color(pattern.into()), pattern);
        }
    }

    #[test]
    fn only_last_step_is_off() {
        let off: usize = STEP_PATTERNS.iter().filter(|p| p.is_off()).count();
        assert_eq!(off, 1);
        assert!(STEP_PATTERNS[STEP_COUNT as usize - 1].is_off());
    }
}
