//! Sample point model.
//!
//! # Responsibility
//! - Hold one timed pen/touch sample with optional pressure and tilt.
//! - Provide attribute-wise merge and the `<point />` export.
//!
//! # Invariants
//! - `x` and `y` are always present.
//! - Optional attributes distinguish "not measured" (`None`) from zero.
//! - Export attribute order is `x, y, pressure, xtilt, ytilt, timestamp`.

use crate::export::xml::empty_element;
use serde::{Deserialize, Serialize};

/// One sample captured between pen-down and pen-up.
///
/// Coordinates live in device/canvas space; this model applies no
/// transforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Pen pressure as reported by the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xtilt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ytilt: Option<f64>,
    /// Whole milliseconds since the epoch shared by one writing session.
    ///
    /// Capture code rounds fractional event times before building the point;
    /// the export writes this value as an integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Point {
    /// Creates a point with every optional attribute absent.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Creates a point from all six attributes.
    ///
    /// `Some(0.0)` is stored as a measured zero, never collapsed to `None`.
    pub fn from_parts(
        x: f64,
        y: f64,
        pressure: Option<f64>,
        xtilt: Option<f64>,
        ytilt: Option<f64>,
        timestamp: Option<i64>,
    ) -> Self {
        Self {
            x,
            y,
            pressure,
            xtilt,
            ytilt,
            timestamp,
        }
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_tilt(mut self, xtilt: f64, ytilt: f64) -> Self {
        self.xtilt = Some(xtilt);
        self.ytilt = Some(ytilt);
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Copies every attribute that is present on `other`.
    ///
    /// Attributes absent on `other` keep their current value here, so this
    /// is a merge rather than an overwrite.
    pub fn merge_from(&mut self, other: &Point) {
        self.x = other.x;
        self.y = other.y;
        if other.pressure.is_some() {
            self.pressure = other.pressure;
        }
        if other.xtilt.is_some() {
            self.xtilt = other.xtilt;
        }
        if other.ytilt.is_some() {
            self.ytilt = other.ytilt;
        }
        if other.timestamp.is_some() {
            self.timestamp = other.timestamp;
        }
    }

    /// Renders the self-closing `<point ... />` tag.
    pub fn to_xml(&self) -> String {
        empty_element(
            "point",
            &[
                ("x", Some(self.x.to_string())),
                ("y", Some(self.y.to_string())),
                ("pressure", self.pressure.map(|value| value.to_string())),
                ("xtilt", self.xtilt.map(|value| value.to_string())),
                ("ytilt", self.ytilt.map(|value| value.to_string())),
                ("timestamp", self.timestamp.map(|value| value.to_string())),
            ],
        )
    }
}
