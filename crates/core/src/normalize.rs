//! Character isolation and normalization.
//!
//! Isolation strips strokes that look like unintended links between letters;
//! normalization centers the survivors on the canvas and scales them to a
//! fixed fraction of the frame so every sample renders at a consistent size
//! downstream.

use crate::error::{ExtractError, Result};
use crate::geometry::BBox;
use crate::model::{DrawingData, DrawingPoint};
use crate::params::ExtractParams;
use crate::strokes::segment_strokes;

/// Removes likely connector strokes from one character's point set.
///
/// The points are re-segmented with the same pen-lift threshold as the
/// initial pass, so the stroke boundaries are stable across invocations.
/// With at most one stroke there is nothing to strip and the points come
/// back untouched; otherwise any stroke much wider than it is tall
/// (`connector_aspect`) and shorter than `connector_max_height` is dropped.
/// Surviving strokes are concatenated in drawing order.
pub fn isolate_points(points: &[DrawingPoint], params: &ExtractParams) -> Vec<DrawingPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let strokes = segment_strokes(points, params);
    if strokes.len() <= 1 {
        return points.to_vec();
    }

    strokes
        .into_iter()
        .filter(|stroke| {
            let bounds = BBox::of_points(stroke);
            let connector = bounds.width() > bounds.height() * params.connector_aspect
                && bounds.height() < params.connector_max_height;
            !connector
        })
        .flatten()
        .collect()
}

/// Centers a point set on the canvas and scales it uniformly so it fills
/// `params.fill_ratio` of the frame.
///
/// A dimension of zero contributes a scale factor of 1, so a dot stays a dot
/// and a vertical bar keeps its width. Pressure values pass through
/// unchanged, as do the canvas dimensions. Empty drawings come back as-is.
pub fn normalize_drawing(drawing: DrawingData, params: &ExtractParams) -> Result<DrawingData> {
    if drawing.points.is_empty() {
        return Ok(drawing);
    }

    let bounds = BBox::of_points(&drawing.points);
    let (center_x, center_y) = bounds.center();
    let target_x = f64::from(drawing.width) / 2.0;
    let target_y = f64::from(drawing.height) / 2.0;

    let scale_x = if bounds.width() > 0.0 {
        params.fill_ratio * f64::from(drawing.width) / bounds.width()
    } else {
        1.0
    };
    let scale_y = if bounds.height() > 0.0 {
        params.fill_ratio * f64::from(drawing.height) / bounds.height()
    } else {
        1.0
    };
    let scale = scale_x.min(scale_y);

    // Non-finite scale means the input coordinates were already broken;
    // surface it so the caller can divert to the fallback slicer.
    if !scale.is_finite() {
        return Err(ExtractError::DegenerateScale { scale });
    }

    let points = drawing
        .points
        .iter()
        .map(|p| DrawingPoint {
            x: (p.x - center_x) * scale + target_x,
            y: (p.y - center_y) * scale + target_y,
            pressure: p.pressure,
        })
        .collect();

    Ok(DrawingData {
        points,
        width: drawing.width,
        height: drawing.height,
    })
}
