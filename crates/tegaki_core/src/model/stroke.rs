//! Stroke model: points captured between pen-down and pen-up.
//!
//! # Invariants
//! - Point order is capture order and is never rearranged.
//! - A stroke handed to consumers holds at least one point; empty strokes
//!   only exist while being built.

use crate::export::xml::element_block;
use crate::model::error::{InvalidStateError, ModelResult};
use crate::model::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates an empty stroke under construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `point` as the newest sample. Timestamps are not checked.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Live view of the stored points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the stored point list itself, not a copy.
    pub fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn last_point(&self) -> ModelResult<&Point> {
        self.points.last().ok_or(InvalidStateError::NoPoints {
            operation: "last_point",
        })
    }

    /// Rebuilds this stroke as an independent copy of `source`.
    ///
    /// Each destination point starts blank and is merged from its source
    /// point, so the result has exactly `source.len()` points.
    pub fn replace_from(&mut self, source: &[Point]) {
        self.points = source
            .iter()
            .map(|point| {
                let mut copy = Point::default();
                copy.merge_from(point);
                copy
            })
            .collect();
    }

    /// Milliseconds between the first and last sample.
    ///
    /// Returns `None` for an empty stroke, when either endpoint lacks a
    /// timestamp, or when the difference does not fit in an `i64`.
    pub fn duration(&self) -> Option<i64> {
        let first = self.points.first()?.timestamp?;
        let last = self.points.last()?.timestamp?;
        last.checked_sub(first)
    }

    /// Renders the `<stroke>` block with one indented line per point.
    pub fn to_xml(&self) -> String {
        element_block("stroke", self.points.iter().map(Point::to_xml))
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
