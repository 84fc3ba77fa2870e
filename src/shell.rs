// SPDX: CC0-1.0

use crate::{formula::ParseErr, lex::SubStr};
use anyhow::Context;
use core::fmt;
use std::{
    io::{self, stdin, BufRead, Write},
    sync::Arc,
};

/// Names scoring at or below this are not worth suggesting.
const SIMILARITY_CUTOFF: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Formula,
    Show,
    Set,
    Origin,
    Reset,
    Refine,
    Score,
    Plot,
}

impl Command {
    pub const fn exhaustive() -> &'static [Command] {
        &[
            Self::Help,
            Self::Quit,
            Self::Formula,
            Self::Show,
            Self::Set,
            Self::Origin,
            Self::Reset,
            Self::Refine,
            Self::Score,
            Self::Plot,
        ]
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Help => "display help for each command",
            Self::Quit => "quit the shell",
            Self::Formula => "read parameters from a formula",
            Self::Show => "print the current formula and parameters",
            Self::Set => "set a single parameter by name",
            Self::Origin => "move the lower corner of the view",
            Self::Reset => "restore the initial formula and view",
            Self::Refine => "tick the renderer until it stops refining",
            Self::Score => "print the fit error against the reference points",
            Self::Plot => "write the latest frame to an svg file",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Formula => "formula",
            Self::Show => "show",
            Self::Set => "set",
            Self::Origin => "origin",
            Self::Reset => "reset",
            Self::Refine => "refine",
            Self::Score => "score",
            Self::Plot => "plot",
        }
    }
}

impl core::str::FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for c in Self::exhaustive() {
            if s == c.name() {
                return Ok(*c);
            }
        }
        Err(())
    }
}

/// The candidate most similar to `text`, if any is similar enough.
pub fn most_similar<'a, I>(text: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let text = text.to_ascii_lowercase();
    candidates
        .into_iter()
        .map(|cand| {
            (
                strsim::normalized_damerau_levenshtein(&text, &cand.to_ascii_lowercase()),
                cand,
            )
        })
        .reduce(|acc, elem| if elem.0 > acc.0 { elem } else { acc })
        .filter(|(sim, _)| *sim > SIMILARITY_CUTOFF)
        .map(|(_, cand)| cand)
}

pub fn input<W: Write>(out: W, prompt: impl fmt::Display) -> anyhow::Result<String> {
    fn inner<W: Write>(mut out: W, prompt: impl fmt::Display) -> io::Result<String> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut stdin = stdin().lock();
        let mut s = String::new();
        stdin.read_line(&mut s)?;
        Ok(s.trim().to_string())
    }

    let s = inner(out, prompt).context("read from standard input failed")?;
    Ok(s)
}

pub fn read_fromstr<W: Write, T: core::str::FromStr>(
    mut out: W,
    prompt: impl fmt::Display,
    ignore_empty: bool,
) -> anyhow::Result<Result<Option<T>, <T as core::str::FromStr>::Err>>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    let input = Arc::new(input(&mut out, prompt)?);
    if ignore_empty && input.is_empty() {
        return Ok(Ok(None));
    }
    match input.parse::<T>() {
        Ok(new) => Ok(Ok(Some(new))),
        Err(err) => {
            writeln!(out)?;
            underline(&mut out, &SubStr::all(input))?;
            writeln!(out, "parse error: {err}")?;
            Ok(Err(err))
        }
    }
}

pub fn underline<W: Write>(mut out: W, span: &SubStr) -> io::Result<()> {
    writeln!(out, "{}", span.src())?;
    writeln!(
        out,
        "{}{}",
        " ".repeat(span.start()),
        "^".repeat(span.len())
    )?;
    Ok(())
}

pub fn report_rejected<W: Write>(mut out: W, rejected: &[ParseErr]) -> io::Result<()> {
    for err in rejected {
        underline(&mut out, &err.loc)?;
        writeln!(out, "skipped: {}", err.typ)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_by_name() {
        for c in Command::exhaustive() {
            assert_eq!(c.name().parse::<Command>(), Ok(*c));
        }
        assert_eq!("nope".parse::<Command>(), Err(()));
    }

    #[test]
    fn suggests_close_names() {
        assert_eq!(most_similar("R", ["cx", "cy", "cz", "r", "p"]), Some("r"));
        assert_eq!(most_similar("refin", ["reset", "refine"]), Some("refine"));
        assert_eq!(most_similar("zzzzzz", ["a", "b"]), None);
    }
}
