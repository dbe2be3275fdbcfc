//! Input model: buttons, modifier keys, and the interaction state machine.
//!
//! `InteractionState` replaces a pair of independent "drawing" / "panning"
//! flags. Holding both buttons is a legal state of its own
//! (`DrawingAndPanning`) in which a pointer move both inks and pans.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Keyboard modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform shortcut modifier (Ctrl, or Command on macOS) is held.
    #[must_use]
    pub fn platform(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or pen / single-finger contact). Draws.
    Primary,
    /// Middle mouse button. Ignored.
    Middle,
    /// Right mouse button. Pans.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"z"`, `"Z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Case-insensitive comparison against a single-letter key name.
    #[must_use]
    pub fn is_letter(&self, letter: char) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&letter))
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Undo/redo command recognized from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Platform modifier + `Z` is undo, platform modifier + `Y` is redo.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.platform() {
            return None;
        }
        if key.is_letter('z') {
            Some(Self::Undo)
        } else if key.is_letter('y') {
            Some(Self::Redo)
        } else {
            None
        }
    }
}

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No button held.
    #[default]
    Idle,
    /// Primary button held: pointer moves extend the open stroke.
    Drawing,
    /// Secondary button held: pointer moves pan the camera.
    Panning,
    /// Both held: pointer moves draw and pan.
    DrawingAndPanning,
}

impl InteractionState {
    /// State after `button` is pressed.
    #[must_use]
    pub fn press(self, button: Button) -> Self {
        match (self, button) {
            (Self::Idle | Self::Drawing, Button::Primary) => Self::Drawing,
            (Self::Idle | Self::Panning, Button::Secondary) => Self::Panning,
            (Self::Panning, Button::Primary) | (Self::Drawing, Button::Secondary) => Self::DrawingAndPanning,
            (Self::DrawingAndPanning, _) | (_, Button::Middle) => self,
        }
    }

    /// State after any tracked button is released. Releasing ends both modes.
    #[must_use]
    pub fn release(self) -> Self {
        Self::Idle
    }

    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing | Self::DrawingAndPanning)
    }

    #[must_use]
    pub fn is_panning(self) -> bool {
        matches!(self, Self::Panning | Self::DrawingAndPanning)
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// Last and previous pointer positions in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub current: Point,
    pub previous: Point,
}

impl Default for Cursor {
    fn default() -> Self {
        let origin = Point::new(0.0, 0.0);
        Self { current: origin, previous: origin }
    }
}

impl Cursor {
    /// Snap both positions to `at`, e.g. on press.
    pub fn reset(&mut self, at: Point) {
        self.current = at;
        self.previous = at;
    }

    /// Record a new pointer position.
    pub fn move_to(&mut self, at: Point) {
        self.current = at;
    }

    /// Mark the current position as processed.
    pub fn settle(&mut self) {
        self.previous = self.current;
    }

    /// Screen-space movement since the last settled position.
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        (self.current.x - self.previous.x, self.current.y - self.previous.y)
    }
}
