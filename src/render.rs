//! Rendering: repaints committed strokes onto a 2D drawing surface.
//!
//! The renderer receives read-only views of the stroke history and the
//! camera and produces pixels; it never mutates application state. The
//! drawing backend is abstracted as [`Surface`] so the same repaint runs
//! against the browser's `CanvasRenderingContext2d` and against test doubles.
//!
//! All surface calls propagate errors via `Result<(), S::Error>`. The
//! top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::color::Color;
use crate::doc::Stroke;

/// Minimal 2D drawing backend.
pub trait Surface {
    type Error;

    /// Fill the whole `width` x `height` area with `background`.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn clear_and_fill(&mut self, width: f64, height: f64, background: &str) -> Result<(), Self::Error>;

    /// Stroke a straight line between two screen points with round caps and joins.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn draw_segment(&mut self, start: Point, end: Point, color: &Color, line_width: f64) -> Result<(), Self::Error>;
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Device pixel ratio of the backing store.
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

/// Fixed pen and background styling for a repaint.
#[derive(Debug, Clone, Copy)]
pub struct Style<'a> {
    pub line_width: f64,
    pub background: &'a str,
}

/// Clear the surface, then draw every segment of every stroke, in order,
/// through `camera`.
///
/// Same strokes and camera give the same draw calls.
///
/// # Errors
///
/// Returns the first surface error; later segments are not drawn.
pub fn repaint<'a, S, I>(surface: &mut S, strokes: I, camera: &Camera, viewport: Viewport, style: Style<'_>) -> Result<(), S::Error>
where
    S: Surface,
    I: IntoIterator<Item = &'a Stroke>,
{
    surface.clear_and_fill(viewport.width, viewport.height, style.background)?;

    let mut drawn = 0usize;
    for stroke in strokes {
        for seg in stroke.segments() {
            surface.draw_segment(camera.to_screen(seg.start), camera.to_screen(seg.end), &seg.color, style.line_width)?;
        }
        drawn += 1;
    }
    tracing::trace!(strokes = drawn, scale = camera.scale(), "repaint");
    Ok(())
}

// =============================================================
// Browser backend
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_and_fill(&mut self, width: f64, height: f64, background: &str) -> Result<(), JsValue> {
        self.set_fill_style_str(background);
        self.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_segment(&mut self, start: Point, end: Point, color: &Color, line_width: f64) -> Result<(), JsValue> {
        self.begin_path();
        self.move_to(start.x, start.y);
        self.set_line_cap("round");
        self.set_line_join("round");
        self.line_to(end.x, end.y);
        self.set_stroke_style_str(&color.css());
        self.set_line_width(line_width);
        self.stroke();
        Ok(())
    }
}
