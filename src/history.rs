//! Undo/redo over whole strokes.
//!
//! Two tail-ordered stacks: committed strokes in commit order, and undone
//! strokes with the most recently undone last. Strokes move between the two
//! by value; nothing is copied or mutated. Committing new work clears the redo
//! stack, so redo only replays an unbroken chain of undos.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::Stroke;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    done: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a stroke. Invalidates everything on the redo stack.
    pub fn push(&mut self, stroke: Stroke) {
        self.done.push(stroke);
        self.undone.clear();
    }

    /// Move the newest committed stroke onto the redo stack.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Stroke> {
        let stroke = self.done.pop()?;
        self.undone.push(stroke);
        self.undone.last()
    }

    /// Move the most recently undone stroke back onto the history.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Stroke> {
        let stroke = self.undone.pop()?;
        self.done.push(stroke);
        self.done.last()
    }

    /// Committed strokes, oldest first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.done
    }

    /// Undone strokes, most recently undone last.
    #[must_use]
    pub fn redo_stack(&self) -> &[Stroke] {
        &self.undone
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
