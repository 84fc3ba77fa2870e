// SPDX: CC0-1.0

//! Text form of a curve's parameter vector.
//!
//! Reading is positional and forgiving: the n-th coefficient number in the
//! text lands in the n-th parameter, parameters without a matching number
//! keep their value, and numbers that fail to parse are reported and skipped.
//! Rendering produces canonical text that reads back to the same numbers.

use crate::{
    eval::{Conic, CrossLines, Curve},
    lex::{Lexer, SubStr, TokTyp},
    Number,
};
use core::{fmt, num::ParseFloatError};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrTyp {
    ParseNum(ParseFloatError),
    /// Digits that overflow to infinity.
    NotFinite,
}

impl fmt::Display for ParseErrTyp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseNum(err) => write!(f, "invalid number: {err}"),
            Self::NotFinite => write!(f, "number is too large"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErr {
    pub typ: ParseErrTyp,
    pub loc: SubStr,
}

/// Outcome of reading a formula into a parameter vector.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Number of leading parameters that received a value.
    pub assigned: usize,
    /// Tokens that looked numeric but were skipped.
    pub rejected: Vec<ParseErr>,
}

impl Parsed {
    pub fn is_complete(&self, arity: usize) -> bool {
        self.assigned >= arity
    }
}

/// Coefficient numbers of `src`, left to right, exponents excluded.
pub fn numbers(src: &Arc<String>) -> (Vec<Number>, Vec<ParseErr>) {
    let mut vals = Vec::new();
    let mut rejected = Vec::new();
    for tok in Lexer::new(src) {
        if tok.typ == TokTyp::Exponent {
            continue;
        }
        match tok.loc.get().parse::<Number>() {
            Ok(val) if val.is_finite() => vals.push(val),
            Ok(_) => rejected.push(ParseErr {
                typ: ParseErrTyp::NotFinite,
                loc: tok.loc,
            }),
            Err(err) => rejected.push(ParseErr {
                typ: ParseErrTyp::ParseNum(err),
                loc: tok.loc,
            }),
        }
    }
    (vals, rejected)
}

pub trait Formula: Curve {
    /// Canonical text for the current parameters.
    fn render(&self) -> String;

    /// Overwrites parameters positionally from the numbers found in `src`.
    fn parse_into(&mut self, src: &Arc<String>) -> Parsed {
        let (vals, rejected) = numbers(src);
        let params = self.params_mut();
        let assigned = vals.len().min(params.len());
        params[..assigned].copy_from_slice(&vals[..assigned]);
        if !rejected.is_empty() {
            log::warn!("skipped {} malformed number(s) in formula", rejected.len());
        }
        Parsed { assigned, rejected }
    }
}

impl Formula for Conic {
    fn render(&self) -> String {
        let [a, b, c, d, e, f] = self.coeffs;
        format!("({a}*(x^2)) + ({b}*x*y) + ({c}*(y^2)) + ({d}*x) + ({e}*y) + {f} = 0")
    }
}

impl Formula for CrossLines {
    fn render(&self) -> String {
        let [cx, cy, cz, r, p] = self.params;
        format!("cx = {cx}, cy = {cy}, cz = {cz}, r = {r}, p = {p}")
    }
}

/// Reads `src` into a fresh curve starting from `base`.
pub fn parse<F: Formula + Clone>(src: &str, base: &F) -> (F, Parsed) {
    let mut ret = base.clone();
    let parsed = ret.parse_into(&Arc::new(src.to_string()));
    (ret, parsed)
}
