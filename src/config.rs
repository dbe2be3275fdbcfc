//! Engine configuration, parsed from JSON handed over by the host page.
//!
//! Every field is optional in the JSON; missing fields take the defaults in
//! [`crate::consts`]. Unknown fields are rejected so typos surface early.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::camera::ScaleLimits;
use crate::color::Color;
use crate::consts::{
    BACKGROUND, INITIAL_HUE, LINE_WIDTH_PX, MAX_SCALE, MIN_SCALE, PEN_LIGHTNESS, PEN_SATURATION, WHEEL_ZOOM_DIVISOR,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stroke width in screen pixels.
    pub line_width: f64,
    /// CSS colour used to clear the surface.
    pub background: String,
    /// Wheel delta per 100% zoom change. Larger is slower.
    pub wheel_zoom_divisor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Hue of the first stroke.
    pub initial_hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Seed for the next-stroke hue generator. Taken from the host clock when absent.
    pub hue_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: LINE_WIDTH_PX,
            background: BACKGROUND.to_string(),
            wheel_zoom_divisor: WHEEL_ZOOM_DIVISOR,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            initial_hue: INITIAL_HUE,
            saturation: PEN_SATURATION,
            lightness: PEN_LIGHTNESS,
            hue_seed: None,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. An empty or whitespace-only string
    /// yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("line_width", self.line_width)?;
        require_positive("wheel_zoom_divisor", self.wheel_zoom_divisor)?;
        require_positive("min_scale", self.min_scale)?;
        require_positive("max_scale", self.max_scale)?;
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid {
                field: "min_scale",
                reason: format!("{} exceeds max_scale {}", self.min_scale, self.max_scale),
            });
        }
        if !self.initial_hue.is_finite() {
            return Err(invalid("initial_hue", "must be finite"));
        }
        require_percent("saturation", self.saturation)?;
        require_percent("lightness", self.lightness)?;
        if self.background.trim().is_empty() {
            return Err(invalid("background", "must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits { min: self.min_scale, max: self.max_scale }
    }

    /// Pen colour for `hue` at the configured saturation and lightness.
    #[must_use]
    pub fn pen(&self, hue: f64) -> Color {
        Color::hsl(hue, self.saturation, self.lightness)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("{value} is not a positive finite number") })
    }
}

fn require_percent(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("{value} is outside 0..=100") })
    }
}
