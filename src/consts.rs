//! Shared numeric and style defaults for the whiteboard crate.

// ── Pen ─────────────────────────────────────────────────────────

/// Stroke width in screen pixels.
pub const LINE_WIDTH_PX: f64 = 4.0;

/// Hue used for the very first stroke of a session.
pub const INITIAL_HUE: f64 = 0.0;

/// Fixed HSL saturation (percent) of every pen colour.
pub const PEN_SATURATION: f64 = 100.0;

/// Fixed HSL lightness (percent) of every pen colour.
pub const PEN_LIGHTNESS: f64 = 70.0;

/// Exclusive upper bound of the hue circle, in degrees.
pub const HUE_CIRCLE: f64 = 360.0;

// ── Surface ─────────────────────────────────────────────────────

/// Background fill for a full repaint.
pub const BACKGROUND: &str = "black";

// ── Zoom ────────────────────────────────────────────────────────

/// Wheel delta that corresponds to a 100% scale change.
pub const WHEEL_ZOOM_DIVISOR: f64 = 5000.0;

/// Smallest scale a zoom step may reach.
pub const MIN_SCALE: f64 = 0.01;

/// Largest scale a zoom step may reach.
pub const MAX_SCALE: f64 = 100.0;
