//! The character-extraction pipeline.
//!
//! Stages, in order: stroke segmentation, character-bounds calculation,
//! point extraction by bounding box, left-to-right matching against the
//! expected characters, then per-character isolation and normalization. A
//! pure horizontal slicer serves as the fallback when the primary pipeline
//! errors out or produces nothing.

use indexmap::IndexMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::clusters::compute_character_bounds;
use crate::error::{ExtractError, Result};
use crate::geometry::BBox;
use crate::model::{DrawingData, DrawingPoint, SampleMap};
use crate::normalize::{isolate_points, normalize_drawing};
use crate::params::ExtractParams;
use crate::strokes::segment_strokes;

/// Deduplicated target characters: whitespace stripped, first-seen order.
pub fn unique_characters(expected: &str) -> Vec<char> {
    expected
        .chars()
        .filter(|c| !c.is_whitespace())
        .unique()
        .collect()
}

/// Selects, for each box, every point of the original sequence lying inside
/// it (inclusive on all edges).
///
/// Overlapping boxes may claim the same point; no deduplication is done.
/// Best effort, given that the boxes themselves are heuristic.
pub fn extract_by_bounds(points: &[DrawingPoint], bounds: &[BBox]) -> Vec<Vec<DrawingPoint>> {
    bounds
        .iter()
        .map(|b| {
            points
                .iter()
                .filter(|p| b.contains(p.x, p.y))
                .copied()
                .collect()
        })
        .collect()
}

fn segment_min_x(segment: &[DrawingPoint]) -> f64 {
    segment
        .iter()
        .map(|p| p.x)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Zips segments, sorted left to right by minimum x (empty segments sort as
/// 0), against the expected characters. Trailing segments or characters
/// without a partner are silently dropped.
pub fn match_to_expected(
    segments: Vec<Vec<DrawingPoint>>,
    expected: &[char],
) -> IndexMap<char, Vec<DrawingPoint>> {
    segments
        .into_iter()
        .sorted_by_key(|segment| OrderedFloat(segment_min_x(segment)))
        .zip(expected.iter().copied())
        .map(|(segment, ch)| (ch, segment))
        .collect()
}

fn check_finite(points: &[DrawingPoint]) -> Result<()> {
    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(ExtractError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
    }
    Ok(())
}

/// The primary heuristic pipeline. Fails only on broken input coordinates;
/// partial matches are not errors.
fn run_pipeline(
    drawing: &DrawingData,
    targets: &[char],
    params: &ExtractParams,
) -> Result<SampleMap> {
    check_finite(&drawing.points)?;

    let strokes = segment_strokes(&drawing.points, params);
    let bounds = compute_character_bounds(&strokes, targets.len(), params);
    let segments = extract_by_bounds(&drawing.points, &bounds);
    let matched = match_to_expected(segments, targets);

    let mut samples = SampleMap::new();
    for (ch, points) in matched {
        if points.is_empty() {
            continue;
        }
        let isolated = isolate_points(&points, params);
        let sample = normalize_drawing(
            DrawingData::new(isolated, drawing.width, drawing.height),
            params,
        )?;
        samples.insert(ch, sample);
    }
    Ok(samples)
}

/// Divides the full x-range of the points into equal-width vertical bands
/// and buckets each point by its x. Empty bands are dropped, so the result
/// can be shorter than `count`. Bands come out left to right by
/// construction.
fn slice_horizontally(points: &[DrawingPoint], count: usize) -> Vec<Vec<DrawingPoint>> {
    if points.is_empty() || count <= 1 {
        return vec![points.to_vec()];
    }

    let bounds = BBox::of_points(points);
    let band_width = bounds.width() / count as f64;

    let mut bands = vec![Vec::new(); count];
    for p in points {
        let idx = if band_width > 0.0 {
            (((p.x - bounds.min_x) / band_width) as usize).min(count - 1)
        } else {
            // All points share one x; a single band gets everything.
            0
        };
        bands[idx].push(*p);
    }

    bands.into_iter().filter(|b| !b.is_empty()).collect()
}

/// Last-resort extraction: equal-width horizontal slicing.
///
/// No stroke analysis, no isolation; each band is normalized and zipped
/// positionally with the expected characters. Used by
/// [`extract_characters_with_params`] when the primary pipeline fails, and
/// exposed for callers that want the dumb slicing directly.
pub fn fallback_extraction(
    drawing: &DrawingData,
    targets: &[char],
    params: &ExtractParams,
) -> Result<SampleMap> {
    check_finite(&drawing.points)?;

    let bands = slice_horizontally(&drawing.points, targets.len());

    let mut samples = SampleMap::new();
    for (points, &ch) in bands.into_iter().zip(targets) {
        let sample = normalize_drawing(
            DrawingData::new(points, drawing.width, drawing.height),
            params,
        )?;
        samples.insert(ch, sample);
    }
    Ok(samples)
}

/// Extracts per-character samples with default parameters.
/// See [`extract_characters_with_params`].
pub fn extract_characters(drawing: &DrawingData, expected: &str) -> SampleMap {
    extract_characters_with_params(drawing, expected, &ExtractParams::default())
}

/// Extracts per-character samples from one freehand sentence drawing.
///
/// `expected` is deduplicated by first occurrence with whitespace stripped;
/// every key of the result is drawn from that set. The call never fails and
/// never panics: empty input yields an empty map, a pipeline failure or an
/// empty primary result is retried with the fallback slicer, and a fallback
/// failure yields an empty map. Deterministic for identical input.
pub fn extract_characters_with_params(
    drawing: &DrawingData,
    expected: &str,
    params: &ExtractParams,
) -> SampleMap {
    let targets = unique_characters(expected);
    if drawing.points.is_empty() || targets.is_empty() {
        return SampleMap::new();
    }

    match run_pipeline(drawing, &targets, params) {
        Ok(samples) if !samples.is_empty() => samples,
        Ok(_) => {
            debug!("primary pipeline produced no samples, slicing horizontally");
            fallback_extraction(drawing, &targets, params).unwrap_or_default()
        }
        Err(err) => {
            warn!(%err, "primary pipeline failed, slicing horizontally");
            fallback_extraction(drawing, &targets, params).unwrap_or_default()
        }
    }
}
