//! Geometric primitives for stroke analysis.
//!
//! Provides the axis-aligned `BBox` value type used throughout the pipeline
//! plus the point-distance helper for pen-lift detection. `BBox` is an
//! immutable value type: split and merge operations always produce new boxes.

use serde::Serialize;

use crate::model::DrawingPoint;

/// Axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BBox {
    /// Zero-area box at the origin, the bound of an empty point set.
    pub const ZERO: BBox = BBox {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    };

    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounding box of a point set. Empty input yields [`BBox::ZERO`].
    pub fn of_points(points: &[DrawingPoint]) -> BBox {
        if points.is_empty() {
            return BBox::ZERO;
        }
        let mut bounds = BBox {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Inclusive containment test for a coordinate pair.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Gap between the x-ranges of two boxes, 0 when they overlap.
    pub fn horizontal_gap(&self, other: &BBox) -> f64 {
        let overlap = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        if overlap > 0.0 {
            return 0.0;
        }
        (self.max_x - other.min_x)
            .abs()
            .min((self.min_x - other.max_x).abs())
    }

    /// Length of the y-range overlap of two boxes, 0 when disjoint.
    pub fn vertical_overlap(&self, other: &BBox) -> f64 {
        (self.max_y.min(other.max_y) - self.min_y.max(other.min_y)).max(0.0)
    }

    /// True when the boxes overlap on both axes.
    pub fn intersects(&self, other: &BBox) -> bool {
        let overlap_x = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        let overlap_y = self.max_y.min(other.max_y) - self.min_y.max(other.min_y);
        overlap_x > 0.0 && overlap_y > 0.0
    }

    /// Euclidean distance between box centers, 0 when the boxes intersect.
    pub fn center_distance(&self, other: &BBox) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }
        let (cx1, cy1) = self.center();
        let (cx2, cy2) = other.center();
        ((cx2 - cx1).powi(2) + (cy2 - cy1).powi(2)).sqrt()
    }

    /// Partitions the box into `count` equal-width boxes sharing its y-range.
    /// The last piece takes the exact right edge so the pieces tile the box
    /// without floating-point drift.
    pub fn split_horizontal(&self, count: usize) -> Vec<BBox> {
        let piece_width = self.width() / count as f64;
        (0..count)
            .map(|i| {
                let min_x = self.min_x + i as f64 * piece_width;
                let max_x = if i == count - 1 {
                    self.max_x
                } else {
                    min_x + piece_width
                };
                BBox {
                    min_x,
                    max_x,
                    min_y: self.min_y,
                    max_y: self.max_y,
                }
            })
            .collect()
    }
}

/// Euclidean distance between two pen samples.
#[inline]
pub fn point_distance(a: &DrawingPoint, b: &DrawingPoint) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}
