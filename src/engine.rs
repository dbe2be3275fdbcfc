use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, ZoomOutcome};
use crate::color::{Color, HueSource};
use crate::config::{Config, ConfigError};
use crate::doc::{Segment, Stroke, StrokeStore};
use crate::history::History;
use crate::input::{Button, Cursor, InteractionState, Key, Modifiers, Shortcut, WheelDelta};
use crate::render::{self, Style, Surface, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Draw one segment on top of the current frame. Screen coordinates.
    DrawSegment { start: Point, end: Point, color: Color },
    /// The whole scene must be repainted.
    RenderNeeded,
    StrokeCommitted { segments: usize },
    StrokeUndone,
    StrokeRedone,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("canvas 2d context unavailable")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// One `EngineCore` is one whiteboard session; handlers take `&mut self` and
/// run to completion, so a host must funnel every event through a single owner.
pub struct EngineCore {
    pub store: StrokeStore,
    pub camera: Camera,
    pub state: InteractionState,
    pub cursor: Cursor,
    pub viewport: Viewport,
    config: Config,
    hue: f64,
    hues: HueSource,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(Config::default(), 0)
    }
}

impl EngineCore {
    /// Start a session. `fallback_seed` drives the hue generator unless the
    /// config pins `hue_seed`.
    #[must_use]
    pub fn new(config: Config, fallback_seed: u64) -> Self {
        let hues = HueSource::seeded(config.hue_seed.unwrap_or(fallback_seed));
        Self {
            store: StrokeStore::new(),
            camera: Camera::default(),
            state: InteractionState::default(),
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            hue: config.initial_hue,
            hues,
            config,
        }
    }

    // --- Viewport ---

    /// Record a resized surface (CSS pixels and device pixel ratio).
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport = Viewport {
            width: sanitize_extent(width_css),
            height: sanitize_extent(height_css),
            dpr: if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 },
        };
        tracing::debug!(width = self.viewport.width, height = self.viewport.height, dpr = self.viewport.dpr, "viewport resized");
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Middle || !accept(screen_pt) {
            return Vec::new();
        }
        self.state = self.state.press(button);
        self.cursor.reset(screen_pt);
        self.store.begin_stroke();
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if !accept(screen_pt) {
            return Vec::new();
        }
        self.cursor.move_to(screen_pt);
        let mut actions = Vec::new();

        if self.state.is_drawing() {
            let (start, end) = (self.cursor.previous, self.cursor.current);
            let color = self.pen_color();
            if self.record(Segment::new(self.camera.to_logical(start), self.camera.to_logical(end), color)) {
                actions.push(Action::DrawSegment { start, end, color });
            }
        }

        if self.state.is_panning() {
            let (dx, dy) = self.cursor.delta();
            self.camera.pan(dx, dy);
            actions.push(Action::RenderNeeded);
        }

        self.cursor.settle();
        actions
    }

    /// End the gesture: drop a dot at the release point, pick the next hue,
    /// and commit. Releases with no gesture in progress are ignored; with
    /// both buttons held, the first release ends the gesture.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Middle || self.state.is_idle() || !accept(screen_pt) {
            return Vec::new();
        }
        self.state = self.state.release();
        self.cursor.move_to(screen_pt);
        self.cursor.settle();

        let mut actions = Vec::new();
        let at = self.cursor.current;
        let color = self.pen_color();
        if self.record(Segment::dot(self.camera.to_logical(at), color)) {
            actions.push(Action::DrawSegment { start: at, end: at, color });
        }

        // The hue changes for the *next* stroke; this one keeps the old colour.
        self.hue = self.hues.next_hue();

        match self.store.commit_stroke() {
            Ok(segments) => {
                tracing::debug!(segments, strokes = self.store.len(), "stroke committed");
                actions.push(Action::StrokeCommitted { segments });
            }
            Err(err) => tracing::error!(%err, "commit dropped"),
        }
        actions
    }

    /// Zoom around the pointer. Scrolling down zooms out.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        if !accept(screen_pt) {
            return Vec::new();
        }
        let factor = -delta.dy / self.config.wheel_zoom_divisor;
        let outcome = self.camera.zoom(factor, screen_pt, self.config.scale_limits());
        match outcome {
            ZoomOutcome::Applied => tracing::trace!(factor, scale = self.camera.scale(), "wheel zoom"),
            ZoomOutcome::Clamped | ZoomOutcome::Rejected => {
                tracing::warn!(?outcome, factor, scale = self.camera.scale(), "zoom limited");
            }
        }
        if outcome.changed() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match Shortcut::from_key(key, modifiers) {
            Some(Shortcut::Undo) => self.undo(),
            Some(Shortcut::Redo) => self.redo(),
            None => Vec::new(),
        }
    }

    /// Abandon the open stroke, e.g. when the window loses focus mid-drag.
    pub fn on_focus_lost(&mut self) -> Vec<Action> {
        let was_active = !self.state.is_idle();
        self.state = InteractionState::Idle;
        let dropped = self.store.discard_open_stroke().as_ref().map_or(0, Stroke::len);
        if dropped == 0 && !was_active {
            return Vec::new();
        }
        tracing::debug!(dropped, "open stroke discarded");
        vec![Action::RenderNeeded]
    }

    // --- History ---

    /// Undo the newest stroke. Does nothing (and requests no repaint) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.store.undo().is_none() {
            return Vec::new();
        }
        tracing::debug!(strokes = self.store.len(), "undo");
        vec![Action::StrokeUndone, Action::RenderNeeded]
    }

    /// Redo the most recently undone stroke. Silent when there is nothing to redo.
    pub fn redo(&mut self) -> Vec<Action> {
        if self.store.redo().is_none() {
            return Vec::new();
        }
        tracing::debug!(strokes = self.store.len(), "redo");
        vec![Action::StrokeRedone, Action::RenderNeeded]
    }

    // --- Output ---

    /// Repaint every committed stroke onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first surface error.
    pub fn repaint<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::repaint(surface, self.store.all_strokes(), &self.camera, self.viewport, self.style())
    }

    /// Carry out `actions` on `surface`. A requested repaint supersedes the
    /// incremental draws in the same batch.
    ///
    /// # Errors
    ///
    /// Propagates the first surface error.
    pub fn apply<S: Surface>(&self, surface: &mut S, actions: &[Action]) -> Result<(), S::Error> {
        if actions.contains(&Action::RenderNeeded) {
            return self.repaint(surface);
        }
        for action in actions {
            if let Action::DrawSegment { start, end, color } = action {
                surface.draw_segment(*start, *end, color, self.config.line_width)?;
            }
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn history(&self) -> &History {
        self.store.history()
    }

    /// Hue the next segment will be drawn with.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Colour the next segment will be drawn with.
    #[must_use]
    pub fn pen_color(&self) -> Color {
        self.config.pen(self.hue)
    }

    /// Logical width and height currently on screen.
    #[must_use]
    pub fn visible_extent(&self) -> (f64, f64) {
        self.camera.visible_extent(self.viewport.width, self.viewport.height)
    }

    fn style(&self) -> Style<'_> {
        Style { line_width: self.config.line_width, background: &self.config.background }
    }

    fn record(&mut self, seg: Segment) -> bool {
        match self.store.append_segment(seg.start, seg.end, seg.color) {
            Ok(()) => {
                tracing::trace!(?seg.start, ?seg.end, "segment");
                true
            }
            Err(err) => {
                tracing::error!(%err, state = ?self.state, "segment dropped");
                false
            }
        }
    }
}

fn accept(screen_pt: Point) -> bool {
    if screen_pt.is_finite() {
        return true;
    }
    tracing::warn!(?screen_pt, "non-finite pointer position ignored");
    false
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoContext`] if the canvas has no 2D context and
    /// [`EngineError::Config`] if the config is invalid.
    pub fn new(canvas: HtmlCanvasElement, config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;
        let core = EngineCore::new(config, clock_seed());
        Ok(Self { canvas, ctx, core })
    }

    // --- Viewport ---

    /// Resize the backing store to match the CSS size and device pixel ratio,
    /// then repaint.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        let vp = self.core.viewport;
        self.canvas.set_width(device_pixels(vp.width, vp.dpr));
        self.canvas.set_height(device_pixels(vp.height, vp.dpr));
        if let Err(err) = self.ctx.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0) {
            tracing::error!(err = ?err, "set_transform failed");
        }
        self.execute(actions)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let actions = self.core.on_pointer_down(screen_pt, button);
        self.execute(actions)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_move(screen_pt);
        self.execute(actions)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let actions = self.core.on_pointer_up(screen_pt, button);
        self.execute(actions)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let actions = self.core.on_wheel(screen_pt, delta);
        self.execute(actions)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_key_down(key, modifiers);
        self.execute(actions)
    }

    pub fn on_focus_lost(&mut self) -> Vec<Action> {
        let actions = self.core.on_focus_lost();
        self.execute(actions)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        let actions = self.core.undo();
        self.execute(actions)
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let actions = self.core.redo();
        self.execute(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if a canvas call fails.
    pub fn render(&mut self) -> Result<(), EngineError> {
        self.core.repaint(&mut self.ctx)?;
        Ok(())
    }

    fn execute(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if let Err(err) = self.core.apply(&mut self.ctx, &actions) {
            tracing::error!(err = ?err, "draw failed");
        }
        actions
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_pixels(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}
