//! LED output abstraction.
//!
//! Provides the [`RgbLed`] trait the sequencer drives, and [`DigitalRgbLed`]
//! which maps a color onto three on/off GPIO lines.

use crate::pattern::LedPattern;
use embedded_hal::digital::{OutputPin, PinState};
use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow
/// the sequencer to control it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. Handle any hardware errors
    /// internally - this method cannot fail.
    fn set_color(&mut self, color: Srgb);
}

/// Three independent digital outputs driven as one RGB LED.
///
/// A channel is switched on when its color component is 0.5 or above.
pub struct DigitalRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    green: G,
    blue: B,
    red: R,
    active_low: bool,
}

impl<G, B, R> DigitalRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    /// Creates an LED from three output pins.
    ///
    /// # Arguments
    /// * `green` - Output for the green LED
    /// * `blue` - Output for the blue LED
    /// * `red` - Output for the red LED
    /// * `active_low` - true when a low level lights the LED (common anode)
    pub fn new(green: G, blue: B, red: R, active_low: bool) -> Self {
        Self {
            green,
            blue,
            red,
            active_low,
        }
    }

    /// Releases the pins.
    pub fn free(self) -> (G, B, R) {
        (self.green, self.blue, self.red)
    }

    fn level(&self, on: bool) -> PinState {
        PinState::from(on != self.active_low)
    }
}

impl<G, B, R> RgbLed for DigitalRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    fn set_color(&mut self, color: Srgb) {
        let pattern = LedPattern::from_color(color);

        let _ = self.green.set_state(self.level(pattern.green));
        let _ = self.blue.set_state(self.level(pattern.blue));
        let _ = self.red.set_state(self.level(pattern.red));
    }
}
