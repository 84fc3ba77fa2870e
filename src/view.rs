// SPDX: CC0-1.0

use crate::{Number, Point, Surface};
use core::{fmt, ops::Range};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("view span must be finite and > 0, got x span {x} and y span {y}")]
    EmptySpan { x: Number, y: Number },
}

/// Visible region of data space. The span is fixed once constructed; the
/// origin (lower corner) can be moved freely at run time.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewBox {
    pub origin: Point<Number>,
    span: Point<Number>,
    home: Point<Number>,
}

impl ViewBox {
    pub fn new(x: Range<Number>, y: Range<Number>) -> Result<Self, ViewError> {
        let span = Point::new(x.end - x.start, y.end - y.start);
        if !(span.x > 0.0 && span.y > 0.0 && span.x.is_finite() && span.y.is_finite()) {
            return Err(ViewError::EmptySpan {
                x: span.x,
                y: span.y,
            });
        }
        let home = Point::new(x.start, y.start);
        Ok(Self {
            origin: home,
            span,
            home,
        })
    }

    #[inline]
    pub const fn span(&self) -> Point<Number> {
        self.span
    }

    /// Origin the view was constructed with.
    #[inline]
    pub const fn home(&self) -> Point<Number> {
        self.home
    }

    pub fn reset_origin(&mut self) {
        self.origin = self.home;
    }

    pub fn x_range(&self) -> Range<Number> {
        self.origin.x..self.origin.x + self.span.x
    }

    pub fn y_range(&self) -> Range<Number> {
        self.origin.y..self.origin.y + self.span.y
    }

    /// Data space to surface space. Total: points outside the view map
    /// outside the surface, callers clip with [`Surface::contains`].
    pub fn to_surface(&self, p: Point<Number>, surface: Surface) -> Point<Number> {
        Point {
            x: ((p.x - self.origin.x) / self.span.x) * surface.w,
            y: ((p.y - self.origin.y) / self.span.y) * surface.h,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewBox")
            .field("x range", &self.x_range())
            .field("y range", &self.y_range())
            .finish()
    }
}
