//! Writing model: the ordered strokes of one drawn character.
//!
//! # Responsibility
//! - Translate pen-down / pen-move / undo / reset calls into stroke edits.
//! - Derive writing duration and render the `<strokes>` export.
//!
//! # Invariants
//! - Stroke order is capture order.
//! - `line_to_point` never targets anything but the newest stroke, and
//!   fails instead of creating one implicitly.
//! - `remove_last_stroke` and `clear` are safe on an empty writing.

use crate::export::xml::element_block;
use crate::model::error::{InvalidStateError, ModelResult};
use crate::model::point::Point;
use crate::model::stroke::Stroke;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Writing {
    strokes: Vec<Stroke>,
}

impl Writing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pen-down: starts a new stroke holding only `point`.
    pub fn move_to_point(&mut self, point: Point) {
        let mut stroke = Stroke::new();
        stroke.append_point(point);
        self.append_stroke(stroke);
        debug!(
            "event=stroke_begin module=writing status=ok strokes={}",
            self.strokes.len()
        );
    }

    /// Pen-move: extends the newest stroke with `point`.
    ///
    /// # Errors
    /// - Returns `InvalidStateError::NoStrokes` when no stroke was begun.
    pub fn line_to_point(&mut self, point: Point) -> ModelResult<()> {
        let stroke = self
            .strokes
            .last_mut()
            .ok_or(InvalidStateError::NoStrokes {
                operation: "line_to_point",
            })?;
        stroke.append_point(point);
        Ok(())
    }

    /// Appends a fully built stroke as the newest one.
    pub fn append_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Undoes the most recent pen-down/pen-up cycle.
    ///
    /// Returns the removed stroke, or `None` when the writing was empty.
    pub fn remove_last_stroke(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        debug!(
            "event=stroke_remove module=writing status={} strokes={}",
            if removed.is_some() { "ok" } else { "noop" },
            self.strokes.len()
        );
        removed
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        debug!("event=writing_clear module=writing status=ok");
    }

    /// Rebuilds this writing as an independent deep copy of `source`.
    pub fn replace_from(&mut self, source: &[Stroke]) {
        self.strokes = source
            .iter()
            .map(|stroke| {
                let mut copy = Stroke::new();
                copy.replace_from(stroke.points());
                copy
            })
            .collect();
    }

    /// Live view of the stored strokes.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Mutable access to the stored stroke list itself, not a copy.
    pub fn strokes_mut(&mut self) -> &mut Vec<Stroke> {
        &mut self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::point_count).sum()
    }

    pub fn last_stroke(&self) -> ModelResult<&Stroke> {
        self.strokes.last().ok_or(InvalidStateError::NoStrokes {
            operation: "last_stroke",
        })
    }

    /// Milliseconds from the first sample of the first stroke to the last
    /// sample of the last stroke.
    ///
    /// Returns `None` for an empty writing, an empty endpoint stroke, a
    /// missing endpoint timestamp, or a difference that does not fit in an
    /// `i64`.
    pub fn duration(&self) -> Option<i64> {
        let first = self.strokes.first()?.points().first()?.timestamp?;
        let last = self.strokes.last()?.points().last()?.timestamp?;
        last.checked_sub(first)
    }

    /// Renders the `<strokes>` block, re-indenting each stroke block.
    pub fn to_xml(&self) -> String {
        element_block("strokes", self.strokes.iter().map(Stroke::to_xml))
    }
}
