//! Coordinate transform between logical (world) space and screen space.
//!
//! Strokes are stored in logical coordinates so they survive pan and zoom.
//! The camera maps them to screen pixels as `screen = scale * (logical + offset)`
//! and back with the exact inverse `logical = screen / scale - offset`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Inclusive bounds a zoom step clamps the scale into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: MIN_SCALE, max: MAX_SCALE }
    }
}

/// Result of a [`Camera::zoom`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// The requested scale was applied as-is.
    Applied,
    /// The requested scale fell outside the limits and was clamped.
    Clamped,
    /// The step was not applied (non-finite, non-positive, or already at the limit).
    Rejected,
}

impl ZoomOutcome {
    /// Whether the camera changed and the scene must be repainted.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Pan offset and scale of the infinite canvas.
///
/// `offset_x` / `offset_y` are in logical units. `scale` is always strictly
/// positive; it can only be set through [`Camera::new`] and [`Camera::zoom`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Build a camera. Returns `None` unless `scale` is finite and positive.
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64, scale: f64) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then_some(Self { offset_x, offset_y, scale })
    }

    /// Current scale factor (1.0 = no zoom).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert a logical point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn to_screen(&self, logical: Point) -> Point {
        Point {
            x: self.scale * (logical.x + self.offset_x),
            y: self.scale * (logical.y + self.offset_y),
        }
    }

    /// Convert a screen point (CSS pixels) to logical coordinates.
    #[must_use]
    pub fn to_logical(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.scale - self.offset_x,
            y: screen.y / self.scale - self.offset_y,
        }
    }

    /// Convert a screen-space distance (pixels) to a logical distance.
    #[must_use]
    pub fn screen_dist_to_logical(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Logical width and height visible through a viewport of the given size.
    #[must_use]
    pub fn visible_extent(&self, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
        (self.screen_dist_to_logical(viewport_w), self.screen_dist_to_logical(viewport_h))
    }

    /// Shift the view so content follows a screen-space drag of `(dx, dy)`.
    /// Non-finite deltas are ignored.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.offset_x += dx / self.scale;
        self.offset_y += dy / self.scale;
    }

    /// Multiply the scale by `1 + factor_delta`, keeping the logical point
    /// under `anchor` fixed on screen.
    ///
    /// The new scale is clamped into `limits`. A step whose multiplier is not
    /// finite and positive, or whose anchor is not finite, is rejected and
    /// leaves the camera untouched.
    #[allow(clippy::float_cmp)]
    pub fn zoom(&mut self, factor_delta: f64, anchor: Point, limits: ScaleLimits) -> ZoomOutcome {
        let multiplier = 1.0 + factor_delta;
        if !multiplier.is_finite() || multiplier <= 0.0 || !anchor.is_finite() {
            return ZoomOutcome::Rejected;
        }

        let requested = self.scale * multiplier;
        let next = requested.max(limits.min).min(limits.max);
        if next == self.scale || !next.is_finite() || next <= 0.0 {
            return ZoomOutcome::Rejected;
        }

        let pinned = self.to_logical(anchor);
        self.scale = next;
        self.offset_x = anchor.x / next - pinned.x;
        self.offset_y = anchor.y / next - pinned.y;

        if next == requested { ZoomOutcome::Applied } else { ZoomOutcome::Clamped }
    }
}
