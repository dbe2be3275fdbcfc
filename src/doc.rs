//! Stroke model: segments, strokes, and the store that records them.
//!
//! Everything here is in logical coordinates. A stroke is opened on press,
//! grows one segment per pointer move, and is committed to the [`History`]
//! on release, at which point it becomes immutable. The renderer reads the
//! committed strokes through [`StrokeStore::all_strokes`]; the open stroke is
//! never part of a repaint.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::camera::Point;
use crate::color::Color;
use crate::history::History;

/// Errors raised by stroke recording. These indicate a broken input state
/// machine rather than a user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StrokeError {
    #[error("no stroke is open")]
    NoOpenStroke,
    #[error("open stroke has no segments")]
    EmptyStroke,
}

/// A straight, coloured line between two logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    /// A zero-length segment, produced when a press is released.
    #[must_use]
    pub fn dot(at: Point, color: Color) -> Self {
        Self { start: at, end: at, color }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// One press-to-release gesture, as segments in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    segments: Vec<Segment>,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for Stroke {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}

/// The in-progress stroke plus the committed history.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    open: Option<Stroke>,
    history: History,
}

impl StrokeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an empty in-progress stroke. Does nothing if one is already open.
    pub fn begin_stroke(&mut self) {
        if self.open.is_none() {
            self.open = Some(Stroke::new());
        }
    }

    /// Append a segment to the open stroke.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::NoOpenStroke`] if no stroke is open; no stroke
    /// is created implicitly.
    pub fn append_segment(&mut self, start: Point, end: Point, color: Color) -> Result<(), StrokeError> {
        let stroke = self.open.as_mut().ok_or(StrokeError::NoOpenStroke)?;
        stroke.segments.push(Segment::new(start, end, color));
        Ok(())
    }

    /// Move the open stroke onto the history, clear the redo stack, and open
    /// a fresh empty stroke. Returns the number of segments committed.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::NoOpenStroke`] if no stroke is open and
    /// [`StrokeError::EmptyStroke`] if it has no segments; an empty stroke
    /// stays open.
    pub fn commit_stroke(&mut self) -> Result<usize, StrokeError> {
        match &self.open {
            None => return Err(StrokeError::NoOpenStroke),
            Some(stroke) if stroke.is_empty() => return Err(StrokeError::EmptyStroke),
            Some(_) => {}
        }
        let stroke = self.open.replace(Stroke::new()).ok_or(StrokeError::NoOpenStroke)?;
        let len = stroke.len();
        self.history.push(stroke);
        Ok(len)
    }

    /// Drop the open stroke without committing it. Returns it, if any.
    pub fn discard_open_stroke(&mut self) -> Option<Stroke> {
        self.open.take()
    }

    /// The stroke currently being drawn, if any.
    #[must_use]
    pub fn open_stroke(&self) -> Option<&Stroke> {
        self.open.as_ref()
    }

    /// Committed strokes in commit order. Restartable: call again to iterate anew.
    pub fn all_strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.history.strokes().iter()
    }

    /// Undo the newest committed stroke. `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Stroke> {
        self.history.undo()
    }

    /// Redo the most recently undone stroke. `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Stroke> {
        self.history.redo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.strokes().len()
    }

    /// Returns `true` if nothing has been committed (or everything was undone).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.strokes().is_empty()
    }
}
