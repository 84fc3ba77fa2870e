// SPDX: CC0-1.0

//! Real points of a plane curve for a given abscissa.
//!
//! Every [`Curve`] answers "which y values lie on me at this x" with a lazy
//! [`Ys`] sequence. An empty sequence is a valid answer: not every x has a
//! curve point, and numeric domain failures (negative discriminant, division
//! by zero, overflow to a non-finite value) all collapse into "no value here".

use crate::Number;
use core::fmt;

/// Half-extent of the dense sweep used to draw a vertical line.
pub const VERTICAL_SWEEP_EXTENT: Number = 100.0;
/// Spacing between points of the dense vertical sweep.
pub const VERTICAL_SWEEP_STEP: Number = 0.03;

pub trait Curve {
    /// All real y values on the curve at `x`. Restartable and side effect free.
    fn ys(&self, x: Number) -> Ys;

    /// Ordered parameter vector, in the order the formula text uses.
    fn params(&self) -> &[Number];

    fn params_mut(&mut self) -> &mut [Number];

    /// Parameter names, index aligned with [`Curve::params`].
    fn names(&self) -> &'static [&'static str];
}

/// Up to two branch values for a single abscissa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branches {
    vals: [Number; 2],
    len: usize,
}

impl Branches {
    pub const fn none() -> Self {
        Self {
            vals: [0.0; 2],
            len: 0,
        }
    }

    pub fn one(y: Number) -> Self {
        let mut ret = Self::none();
        ret.push(y);
        ret
    }

    pub fn two(y0: Number, y1: Number) -> Self {
        let mut ret = Self::none();
        ret.push(y0);
        ret.push(y1);
        ret
    }

    // non-finite values are domain failures, not curve points
    fn push(&mut self, y: Number) {
        if y.is_finite() && self.len < self.vals.len() {
            self.vals[self.len] = y;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[Number] {
        &self.vals[..self.len]
    }
}

/// Evenly spaced values from `start` up to and including `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    start: Number,
    end: Number,
    step: Number,
    idx: u32,
    done: bool,
}

impl Sweep {
    pub fn new(start: Number, end: Number, step: Number) -> Self {
        let done = !(step > 0.0) || !(start <= end) || !start.is_finite() || !end.is_finite();
        Self {
            start,
            end,
            step,
            idx: 0,
            done,
        }
    }
}

impl Iterator for Sweep {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        if self.done {
            return None;
        }
        let val = self.start + self.step * Number::from(self.idx);
        self.idx += 1;
        if val < self.end {
            Some(val)
        } else {
            // the end itself is always the last value
            self.done = true;
            Some(self.end)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ys {
    Branches { branches: Branches, idx: usize },
    Sweep(Sweep),
}

impl Ys {
    pub const fn empty() -> Self {
        Self::from_branches(Branches::none())
    }

    pub const fn from_branches(branches: Branches) -> Self {
        Self::Branches { branches, idx: 0 }
    }
}

impl Iterator for Ys {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        match self {
            Self::Branches { branches, idx } => {
                let val = branches.as_slice().get(*idx).copied()?;
                *idx += 1;
                Some(val)
            }
            Self::Sweep(sweep) => sweep.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Branches { branches, idx } => {
                let left = branches.len - (*idx).min(branches.len);
                (left, Some(left))
            }
            Self::Sweep(_) => (0, None),
        }
    }
}

/// General second degree curve `A·x² + B·xy + C·y² + D·x + E·y + F = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conic {
    pub coeffs: [Number; 6],
}

impl Conic {
    pub const NAMES: [&'static str; 6] = ["a", "b", "c", "d", "e", "f"];

    #[inline]
    pub const fn new(coeffs: [Number; 6]) -> Self {
        Self { coeffs }
    }

    /// Solves the quadratic in y. A zero leading coefficient falls back to
    /// the linear root; when `c = 0` and `b·x + e = 0` nothing is produced,
    /// even if every y would satisfy the equation at this x.
    pub fn branches(&self, x: Number) -> Branches {
        let [a, b, c, d, e, f] = self.coeffs;
        let lin = b * x + e;
        let rest = a * x * x + d * x + f;

        if c != 0.0 {
            let disc = lin * lin - 4.0 * c * rest;
            if !(disc >= 0.0) {
                return Branches::none();
            }
            let root = disc.sqrt();
            Branches::two((-lin + root) / (2.0 * c), (-lin - root) / (2.0 * c))
        } else if lin != 0.0 {
            Branches::one(-rest / lin)
        } else {
            Branches::none()
        }
    }
}

impl Default for Conic {
    fn default() -> Self {
        Self::new([1.0; 6])
    }
}

impl Curve for Conic {
    fn ys(&self, x: Number) -> Ys {
        Ys::from_branches(self.branches(x))
    }

    fn params(&self) -> &[Number] {
        &self.coeffs
    }

    fn params_mut(&mut self) -> &mut [Number] {
        &mut self.coeffs
    }

    fn names(&self) -> &'static [&'static str] {
        &Self::NAMES
    }
}

impl fmt::Display for Conic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Conic");
        for (name, val) in Self::NAMES.iter().zip(self.coeffs) {
            dbg.field(name, &val);
        }
        dbg.finish()
    }
}

/// Reduced form: two perpendicular lines of slope `r` and `-1/r` through
/// `(cx, cy)`. `cz` and `p` are carried along but do not shape the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossLines {
    pub params: [Number; 5],
}

impl CrossLines {
    pub const NAMES: [&'static str; 5] = ["cx", "cy", "cz", "r", "p"];

    pub const CX: usize = 0;
    pub const CY: usize = 1;
    pub const CZ: usize = 2;
    pub const R: usize = 3;
    pub const P: usize = 4;

    #[inline]
    pub const fn new(params: [Number; 5]) -> Self {
        Self { params }
    }
}

impl Default for CrossLines {
    fn default() -> Self {
        Self::new([1.0; 5])
    }
}

impl Curve for CrossLines {
    fn ys(&self, x: Number) -> Ys {
        let cx = self.params[Self::CX];
        let cy = self.params[Self::CY];
        let r = self.params[Self::R];

        if r != 0.0 {
            Ys::from_branches(Branches::two(r * (x - cx) + cy, (-1.0 / r) * (x - cx) + cy))
        } else if x == cx {
            // vertical line, drawn as a dense column of points
            Ys::Sweep(Sweep::new(
                -VERTICAL_SWEEP_EXTENT,
                VERTICAL_SWEEP_EXTENT,
                VERTICAL_SWEEP_STEP,
            ))
        } else {
            Ys::from_branches(Branches::one(cy))
        }
    }

    fn params(&self) -> &[Number] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [Number] {
        &mut self.params
    }

    fn names(&self) -> &'static [&'static str] {
        &Self::NAMES
    }
}

impl fmt::Display for CrossLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("CrossLines");
        for (name, val) in Self::NAMES.iter().zip(self.params) {
            dbg.field(name, &val);
        }
        dbg.finish()
    }
}
