//! Stroke segmentation: pen-lift detection over the raw point sequence.

use itertools::Itertools;

use crate::geometry::point_distance;
use crate::model::DrawingPoint;
use crate::params::ExtractParams;

/// Splits a point sequence into strokes at pen lifts.
///
/// A gap larger than `params.pen_lift_distance` between consecutive points
/// closes the current stroke and starts a new one at the current point.
/// Strokes with `params.min_stroke_points` points or fewer are dropped as
/// noise; their points are not re-attached to neighboring strokes, but they
/// still participate in bounding-box extraction, which reads the original
/// sequence.
pub fn segment_strokes(points: &[DrawingPoint], params: &ExtractParams) -> Vec<Vec<DrawingPoint>> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut strokes = Vec::new();
    let mut current = vec![*first];

    for (prev, curr) in points.iter().tuple_windows() {
        if point_distance(prev, curr) > params.pen_lift_distance {
            if current.len() > params.min_stroke_points {
                strokes.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
        current.push(*curr);
    }

    if current.len() > params.min_stroke_points {
        strokes.push(current);
    }

    strokes
}
