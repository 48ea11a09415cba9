//! Drawing data model.
//!
//! Mirrors the JSON shape the capture surface stores: a drawing is an ordered
//! list of `{x, y, pressure?}` points plus the canvas dimensions the points
//! are expressed in. Field names and numeric types round-trip through
//! standard JSON parsing, which is the de facto persistence format for
//! extracted samples.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One sampled pen position in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingPoint {
    pub x: f64,
    pub y: f64,
    /// Input-device pressure, when the device reports one. Carried through
    /// the pipeline verbatim, never interpreted by it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl DrawingPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }

    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }
}

/// One complete freehand capture.
///
/// Points are in temporal drawing order, not spatial order; anything that
/// needs spatial order re-sorts explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    pub points: Vec<DrawingPoint>,
    pub width: u32,
    pub height: u32,
}

impl DrawingData {
    pub fn new(points: Vec<DrawingPoint>, width: u32, height: u32) -> Self {
        Self {
            points,
            width,
            height,
        }
    }
}

/// Per-character samples keyed by target character, in match order.
///
/// Built fresh by every extraction call and replaced wholesale by callers
/// that merge it into broader sample storage.
pub type SampleMap = IndexMap<char, DrawingData>;
