//! tests for scoring a curve against reference points
use approx::assert_abs_diff_eq;
use conic_refine::{
    eval::{Conic, CrossLines},
    fit::{self, MISSING_PENALTY},
    Point,
};

fn circle() -> Conic {
    Conic::new([1.0, 0.0, 1.0, 0.0, 0.0, -25.0])
}

#[test]
fn empty_reference_set_scores_zero() {
    assert_eq!(fit::score(&[], &circle()), 0.0);
    assert_eq!(fit::score(&[], &Conic::new([0.0; 6])), 0.0);
}

#[test]
fn point_on_the_circle_scores_zero() {
    assert_eq!(fit::score(&[Point::new(5.0, 0.0)], &circle()), 0.0);
    assert_abs_diff_eq!(
        fit::score(&[Point::new(3.0, -4.0), Point::new(-4.0, 3.0)], &circle()),
        0.0,
        epsilon = 1e-12
    );
}

#[test]
fn nearest_branch_is_used() {
    assert_abs_diff_eq!(fit::score(&[Point::new(0.0, 4.0)], &circle()), 1.0);
    assert_abs_diff_eq!(fit::score(&[Point::new(0.0, -4.5)], &circle()), 0.5);
}

#[test]
fn missing_coverage_is_penalized() {
    assert_eq!(fit::score(&[Point::new(10.0, 0.0)], &circle()), MISSING_PENALTY);
    let mixed = [Point::new(5.0, 0.0), Point::new(10.0, 0.0)];
    assert_abs_diff_eq!(fit::score(&mixed, &circle()), MISSING_PENALTY / 2.0);
}

#[test]
fn error_grows_as_the_point_moves_away() {
    let curve = circle();
    let mut last = -1.0;
    for d in [0.0, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0] {
        let score = fit::score(&[Point::new(0.0, 5.0 + d)], &curve);
        assert!(score >= 0.0);
        assert!(score > last, "d {d}: {score} <= {last}");
        last = score;
    }
}

#[test]
fn average_over_all_points() {
    let points = [
        Point::new(0.0, 6.0),
        Point::new(0.0, -7.0),
        Point::new(4.0, 3.0),
    ];
    assert_abs_diff_eq!(fit::score(&points, &circle()), 1.0, epsilon = 1e-12);
}

#[test]
fn vertical_column_scores_against_its_nearest_sample() {
    let cross = CrossLines::new([2.0, 0.0, 0.0, 0.0, 0.0]);
    let score = fit::score(&[Point::new(2.0, 0.01)], &cross);
    assert!(score < 0.03, "{score}");
    assert_eq!(fit::score(&[Point::new(3.0, 0.0)], &cross), 0.0);
}

#[test]
fn label_has_two_decimals() {
    assert_eq!(fit::error_label(0.25), "E:0.25");
    assert_eq!(fit::error_label(1.0 / 3.0), "E:0.33");
    assert_eq!(fit::error_label(99.0), "E:99.00");
}
