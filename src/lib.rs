// SPDX: CC0-1.0

pub mod config;
pub mod draw;
pub mod eval;
pub mod fit;
pub mod formula;
pub mod lex;
pub mod points;
pub mod refine;
pub mod session;
pub mod shell;
pub mod svg;
pub mod view;

use core::fmt;

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Size of the abstract drawing surface, in surface units (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub w: Number,
    pub h: Number,
}

impl Surface {
    #[inline]
    pub const fn new(w: Number, h: Number) -> Self {
        Self { w, h }
    }

    /// Strictly inside: points on the border are not drawable.
    pub fn contains(&self, p: Point<Number>) -> bool {
        p.x > 0.0 && p.x < self.w && p.y > 0.0 && p.y < self.h
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}
