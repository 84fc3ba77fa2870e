// SPDX: CC0-1.0

use crate::{Number, Point};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Grey,
    Red,
    White,
}

impl Color {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Grey => "grey",
            Self::Red => "red",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One drawing instruction, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Text {
        at: Point<Number>,
        color: Color,
        text: String,
    },
    Dot {
        at: Point<Number>,
        color: Color,
    },
}

impl DrawCmd {
    pub const fn reference(at: Point<Number>) -> Self {
        Self::Dot {
            at,
            color: Color::Red,
        }
    }

    pub const fn curve(at: Point<Number>) -> Self {
        Self::Dot {
            at,
            color: Color::White,
        }
    }
}

/// Everything one sweep produced, ready for a presentation layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
    /// Fit error readout, e.g. `E:0.25`.
    pub error_label: String,
    pub error: Number,
    /// Sampling step that produced the curve points.
    pub step: Number,
}

impl Frame {
    pub fn dots(&self, color: Color) -> impl Iterator<Item = Point<Number>> + '_ {
        self.cmds.iter().filter_map(move |cmd| match cmd {
            DrawCmd::Dot { at, color: c } if *c == color => Some(*at),
            _ => None,
        })
    }
}
