// SPDX: CC0-1.0

//! Crude fitting error of a curve against reference points.
//!
//! Each point is matched against the nearest branch at its own abscissa,
//! so the error is a vertical distance, not a perpendicular one.

use crate::{eval::Curve, Number, Point};

/// Charged for a reference point whose abscissa has no curve point at all.
pub const MISSING_PENALTY: Number = 99.0;

/// Average nearest-branch error over `points`, `0.0` when there are none.
pub fn score<C: Curve + ?Sized>(points: &[Point<Number>], curve: &C) -> Number {
    if points.is_empty() {
        return 0.0;
    }

    let total: Number = points.iter().map(|p| point_error(*p, curve)).sum();
    total / points.len() as Number
}

pub fn point_error<C: Curve + ?Sized>(target: Point<Number>, curve: &C) -> Number {
    curve
        .ys(target.x)
        .map(|y| (target.y - y).abs())
        .filter(|err| !err.is_nan())
        .reduce(Number::min)
        .unwrap_or(MISSING_PENALTY)
}

/// Readout shown next to the curve, e.g. `E:0.25`.
pub fn error_label(err: Number) -> String {
    format!("E:{err:.2}")
}
