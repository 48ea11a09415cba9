//! Character-bounds calculation.
//!
//! Groups strokes into clusters by horizontal proximity and vertical
//! alignment, then reconciles the cluster count with the expected character
//! count: overly wide clusters are split into equal-width pieces, clusters
//! that sit too close together are merged.

use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::geometry::BBox;
use crate::model::DrawingPoint;
use crate::params::ExtractParams;

/// Indices of the strokes forming one cluster.
pub type StrokeGroup = SmallVec<[usize; 4]>;

/// Greedy anchor-based grouping of strokes.
///
/// Each unvisited stroke anchors a new group and claims every other
/// unvisited stroke that is horizontally close and vertically aligned with
/// it. Membership is decided against the anchor only: this is a single pass,
/// not a transitive closure over the proximity graph, and the resulting
/// asymmetry (a stroke near a claimed member but far from the anchor starts
/// its own group) is intentional.
pub fn group_strokes(bounds: &[BBox], params: &ExtractParams) -> Vec<StrokeGroup> {
    let mut visited = vec![false; bounds.len()];
    let mut groups = Vec::new();

    for i in 0..bounds.len() {
        if visited[i] {
            continue;
        }
        let mut group: StrokeGroup = smallvec![i];
        visited[i] = true;

        for j in 0..bounds.len() {
            if visited[j] {
                continue;
            }
            let gap = bounds[i].horizontal_gap(&bounds[j]);
            let overlap = bounds[i].vertical_overlap(&bounds[j]);
            let taller = bounds[i].height().max(bounds[j].height());
            // 0/0 here is NaN, which fails the ratio test below.
            let overlap_ratio = overlap / taller;

            if gap < params.group_gap && overlap_ratio > params.min_vertical_overlap {
                group.push(j);
                visited[j] = true;
            }
        }

        groups.push(group);
    }

    groups
}

/// Splits the widest clusters into equal-width pieces until `expected` boxes
/// exist or nothing splittable remains.
///
/// Each cluster is split at most once, widest first, and its pieces replace
/// it at its original position. Clusters narrower than
/// `params.min_split_width` are left alone. The piece count is capped both
/// by how many extra boxes are still needed and by how many characters of
/// `params.est_char_width` fit in the cluster.
pub fn split_to_count(groups: Vec<BBox>, expected: usize, params: &ExtractParams) -> Vec<BBox> {
    let by_width_desc: Vec<usize> = (0..groups.len())
        .sorted_by_key(|&i| Reverse(OrderedFloat(groups[i].width())))
        .collect();

    let mut pieces: Vec<Vec<BBox>> = groups.iter().map(|b| vec![*b]).collect();
    let mut remaining = expected.saturating_sub(groups.len());

    for idx in by_width_desc {
        if remaining == 0 {
            break;
        }
        let width = groups[idx].width();
        if width < params.min_split_width {
            continue;
        }
        let piece_count = (remaining + 1).min((width / params.est_char_width).round() as usize);
        if piece_count <= 1 {
            continue;
        }
        debug!(width, piece_count, "splitting wide cluster");
        pieces[idx] = groups[idx].split_horizontal(piece_count);
        remaining -= piece_count - 1;
    }

    pieces.into_iter().flatten().collect()
}

/// Merges the closest pair of clusters until `expected` remain.
///
/// Distance is center-to-center Euclidean, treated as 0 when the boxes
/// overlap on both axes; the merged pair is replaced by its union.
pub fn merge_to_count(mut groups: Vec<BBox>, expected: usize) -> Vec<BBox> {
    while groups.len() > expected {
        let mut min_distance = f64::INFINITY;
        let (mut first, mut second) = (0, 0);

        for i in 0..groups.len() - 1 {
            for j in i + 1..groups.len() {
                let distance = groups[i].center_distance(&groups[j]);
                if distance < min_distance {
                    min_distance = distance;
                    first = i;
                    second = j;
                }
            }
        }

        debug!(min_distance, "merging closest clusters");
        groups[first] = groups[first].union(&groups[second]);
        groups.remove(second);
    }

    groups
}

/// Computes one bounding box per hypothesized character.
///
/// Returns an empty list for no strokes. The boxes are not sorted; callers
/// order them by horizontal position when matching against expected text.
pub fn compute_character_bounds(
    strokes: &[Vec<DrawingPoint>],
    expected: usize,
    params: &ExtractParams,
) -> Vec<BBox> {
    if strokes.is_empty() {
        return Vec::new();
    }

    let stroke_bounds: Vec<BBox> = strokes.iter().map(|s| BBox::of_points(s)).collect();
    let groups = group_strokes(&stroke_bounds, params);

    let group_bounds: Vec<BBox> = groups
        .iter()
        .map(|members| {
            members
                .iter()
                .map(|&idx| stroke_bounds[idx])
                .reduce(|acc, b| acc.union(&b))
                .unwrap_or(BBox::ZERO)
        })
        .collect();

    match group_bounds.len().cmp(&expected) {
        std::cmp::Ordering::Less => split_to_count(group_bounds, expected, params),
        std::cmp::Ordering::Greater => merge_to_count(group_bounds, expected),
        std::cmp::Ordering::Equal => group_bounds,
    }
}
