//! Tests for the geometric primitives.

use inkglyph_core::geometry::{point_distance, BBox};
use inkglyph_core::DrawingPoint;

#[test]
fn bound_of_empty_point_set_is_zero() {
    assert_eq!(BBox::of_points(&[]), BBox::ZERO);
}

#[test]
fn bound_of_points() {
    let points = vec![
        DrawingPoint::new(3.0, 7.0),
        DrawingPoint::new(-1.0, 2.0),
        DrawingPoint::new(5.0, 4.0),
    ];
    let b = BBox::of_points(&points);
    assert_eq!(b, BBox::new(-1.0, 5.0, 2.0, 7.0));
    assert_eq!(b.width(), 6.0);
    assert_eq!(b.height(), 5.0);
    assert_eq!(b.center(), (2.0, 4.5));
}

#[test]
fn union_encloses_both() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(5.0, 20.0, -5.0, 5.0);
    assert_eq!(a.union(&b), BBox::new(0.0, 20.0, -5.0, 10.0));
}

#[test]
fn contains_is_inclusive_on_edges() {
    let b = BBox::new(0.0, 10.0, 0.0, 10.0);
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(10.0, 10.0));
    assert!(b.contains(5.0, 5.0));
    assert!(!b.contains(10.1, 5.0));
    assert!(!b.contains(5.0, -0.1));
}

#[test]
fn horizontal_gap_is_zero_when_x_ranges_overlap() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(5.0, 15.0, 100.0, 110.0);
    assert_eq!(a.horizontal_gap(&b), 0.0);
}

#[test]
fn horizontal_gap_between_touching_boxes_is_zero() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(10.0, 20.0, 0.0, 10.0);
    assert_eq!(a.horizontal_gap(&b), 0.0);
}

#[test]
fn horizontal_gap_is_nearest_edge_distance() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(25.0, 40.0, 0.0, 10.0);
    assert_eq!(a.horizontal_gap(&b), 15.0);
    assert_eq!(b.horizontal_gap(&a), 15.0);
}

#[test]
fn vertical_overlap_of_disjoint_ranges_is_zero() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(0.0, 10.0, 20.0, 30.0);
    assert_eq!(a.vertical_overlap(&b), 0.0);
}

#[test]
fn vertical_overlap_length() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(0.0, 10.0, 6.0, 30.0);
    assert_eq!(a.vertical_overlap(&b), 4.0);
}

#[test]
fn center_distance_is_zero_for_intersecting_boxes() {
    let a = BBox::new(0.0, 20.0, 0.0, 20.0);
    let b = BBox::new(10.0, 30.0, 10.0, 30.0);
    assert_eq!(a.center_distance(&b), 0.0);
}

#[test]
fn center_distance_of_separated_boxes() {
    let a = BBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BBox::new(30.0, 40.0, 40.0, 50.0);
    // Centers (5, 5) and (35, 45): a 30-40-50 triangle.
    assert_eq!(a.center_distance(&b), 50.0);
}

#[test]
fn split_horizontal_tiles_exactly() {
    let b = BBox::new(0.0, 150.0, 0.0, 50.0);
    let pieces = b.split_horizontal(2);
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0], BBox::new(0.0, 75.0, 0.0, 50.0));
    assert_eq!(pieces[1], BBox::new(75.0, 150.0, 0.0, 50.0));
}

#[test]
fn split_horizontal_last_piece_takes_exact_edge() {
    let b = BBox::new(0.0, 10.0, 0.0, 1.0);
    let pieces = b.split_horizontal(3);
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[2].max_x, 10.0);
    assert_eq!(pieces[0].min_x, 0.0);
    // Adjacent pieces share an edge.
    assert_eq!(pieces[0].max_x, pieces[1].min_x);
    assert_eq!(pieces[1].max_x, pieces[2].min_x);
}

#[test]
fn point_distance_is_euclidean() {
    let a = DrawingPoint::new(0.0, 0.0);
    let b = DrawingPoint::new(3.0, 4.0);
    assert_eq!(point_distance(&a, &b), 5.0);
}
