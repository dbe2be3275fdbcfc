//! Pen colour: a hue on a fixed-saturation, fixed-lightness HSL circle, and
//! the random source that picks the hue of the next stroke.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{HUE_CIRCLE, PEN_LIGHTNESS, PEN_SATURATION};

/// An HSL colour as drawn by the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: f64,
    /// Lightness in percent.
    pub lightness: f64,
}

impl Color {
    /// Pen colour for `hue` at the default saturation and lightness.
    #[must_use]
    pub fn from_hue(hue: f64) -> Self {
        Self::hsl(hue, PEN_SATURATION, PEN_LIGHTNESS)
    }

    /// Colour with an explicit saturation and lightness; the hue is wrapped onto the circle.
    #[must_use]
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue: normalize_hue(hue), saturation, lightness }
    }

    /// CSS colour string, e.g. `hsl(120,100%,70%)`.
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Wrap any finite hue onto `[0, 360)`. Non-finite input maps to 0.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(HUE_CIRCLE);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= HUE_CIRCLE { 0.0 } else { wrapped }
}

/// Uniform random hue generator.
#[derive(Debug, Clone)]
pub struct HueSource {
    rng: SmallRng,
}

impl HueSource {
    /// Deterministic source; the same seed yields the same hue sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Next hue, uniform on `[0, 360)`.
    pub fn next_hue(&mut self) -> f64 {
        self.rng.random_range(0.0..HUE_CIRCLE)
    }
}
