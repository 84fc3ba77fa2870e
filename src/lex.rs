// SPDX: CC0-1.0

//! Scanner for the numbers inside a formula.
//!
//! Only numeric tokens matter to the formula reader; everything else
//! (identifiers, operators, parentheses, the `= 0` tail) is skipped. A number
//! is a maximal run of ascii digits and `.`, optionally preceded by a `-` that
//! touches it. A number written right after `^` is an exponent.

use core::{fmt, iter::Peekable, str::CharIndices};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubStr {
    src: Arc<String>,
    start: usize,
    len: usize,
}

impl SubStr {
    #[inline]
    pub const fn new(src: Arc<String>, start: usize, len: usize) -> Self {
        Self { src, start, len }
    }

    #[inline]
    pub fn all(src: Arc<String>) -> Self {
        let len = src.len();
        Self::new(src, 0, len)
    }

    pub fn src(&self) -> Arc<String> {
        Arc::clone(&self.src)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self) -> &str {
        &self.src[self.start..self.start + self.len]
    }

    pub fn shift_right(&mut self, by: usize) {
        self.len += by;
    }
}

impl fmt::Display for SubStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokTyp {
    Number,
    Exponent,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tok {
    pub typ: TokTyp,
    pub loc: SubStr,
}

#[derive(Debug)]
pub struct Lexer<'src> {
    src: &'src Arc<String>,
    cur: Peekable<CharIndices<'src>>,
    after_caret: bool, // last non-whitespace character was '^'
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src Arc<String>) -> Self {
        Self {
            src,
            cur: src.char_indices().peekable(),
            after_caret: false,
        }
    }

    fn is_num_chr(chr: char) -> bool {
        chr.is_ascii_digit() || chr == '.'
    }

    fn consume_number(&mut self, start: usize, typ: TokTyp) -> Tok {
        let mut tok = Tok {
            typ,
            loc: SubStr::new(Arc::clone(self.src), start, 0),
        };
        if let Some((_, '-')) = self.cur.peek() {
            tok.loc.shift_right(1);
            self.cur.next();
        }
        while let Some((_, chr)) = self.cur.peek().copied() {
            if Self::is_num_chr(chr) {
                // @unicode: digits and '.' are one byte wide
                tok.loc.shift_right(1);
                self.cur.next();
            } else {
                break;
            }
        }
        tok
    }

    /// Whether the character after the current `-` starts a number.
    fn minus_is_sign(&self, idx: usize) -> bool {
        self.src[idx + 1..]
            .chars()
            .next()
            .map(Self::is_num_chr)
            .unwrap_or(false)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Tok;

    fn next(&mut self) -> Option<Tok> {
        while let Some((idx, chr)) = self.cur.peek().copied() {
            if chr.is_ascii_whitespace() {
                self.cur.next();
                continue;
            }

            let typ = if self.after_caret {
                TokTyp::Exponent
            } else {
                TokTyp::Number
            };

            if Self::is_num_chr(chr) || (chr == '-' && self.minus_is_sign(idx)) {
                self.after_caret = false;
                return Some(self.consume_number(idx, typ));
            }

            self.after_caret = chr == '^';
            self.cur.next();
        }
        None
    }
}
