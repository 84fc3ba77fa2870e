// SPDX: CC0-1.0

//! Settings read from the environment.
//!
//! ┌ `COEFICIENT_MIN` / `COEFICIENT_MAX` : bounds for hand-set parameters
//! ├ `INITIAL_FORMULA`                   : formula applied at start and on reset
//! ├ `FLOOR_RESOLUTION`                  : finest refinement step
//! ├ `START_STEP`                        : step restored on a restart
//! └ `FRAME_DRAW_MS`                     : pause between refinement ticks
//!
//! Windows draws slowly, so its floor and frame interval default coarser.

use crate::{
    refine::{RefineCfg, DEFAULT_FLOOR_STEP, DEFAULT_START_STEP},
    Number,
};
use core::{ops::RangeInclusive, time::Duration};
use thiserror::Error;

pub const COEFICIENT_MIN: &str = "COEFICIENT_MIN";
pub const COEFICIENT_MAX: &str = "COEFICIENT_MAX";
pub const INITIAL_FORMULA: &str = "INITIAL_FORMULA";
pub const FLOOR_RESOLUTION: &str = "FLOOR_RESOLUTION";
pub const START_STEP: &str = "START_STEP";
pub const FRAME_DRAW_MS: &str = "FRAME_DRAW_MS";

pub const DEFAULT_COEFICIENT_MIN: Number = -50.0;
pub const DEFAULT_COEFICIENT_MAX: Number = 50.0;
pub const SLOW_FLOOR_STEP: Number = 0.005;
pub const DEFAULT_FRAME_DRAW_MS: u64 = 50;
pub const SLOW_FRAME_DRAW_MS: u64 = 250;

/// Bounds for moving the view origin by hand.
pub const ORIGIN_BOUNDS: RangeInclusive<Number> = -10.0..=10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("COEFICIENT_MIN must be below COEFICIENT_MAX, got {min} and {max}")]
    EmptyBounds { min: Number, max: Number },

    #[error("{key} must be finite and > 0, got {got}")]
    NonPositive { key: &'static str, got: Number },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub coeficient_bounds: RangeInclusive<Number>,
    pub initial_formula: String,
    pub refine: RefineCfg,
    pub frame_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let slow = cfg!(windows);
        let default_floor = if slow { SLOW_FLOOR_STEP } else { DEFAULT_FLOOR_STEP };
        let default_ms = if slow { SLOW_FRAME_DRAW_MS } else { DEFAULT_FRAME_DRAW_MS };

        let number = |key: &'static str, default: Number| -> Result<Number, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse::<Number>()
                    .map_err(|_| ConfigError::InvalidNumber { key, value }),
            }
        };
        let positive = |key: &'static str, default: Number| -> Result<Number, ConfigError> {
            let got = number(key, default)?;
            if got > 0.0 && got.is_finite() {
                Ok(got)
            } else {
                Err(ConfigError::NonPositive { key, got })
            }
        };

        let min = number(COEFICIENT_MIN, DEFAULT_COEFICIENT_MIN)?;
        let max = number(COEFICIENT_MAX, DEFAULT_COEFICIENT_MAX)?;
        if !(min < max) {
            return Err(ConfigError::EmptyBounds { min, max });
        }

        let floor = positive(FLOOR_RESOLUTION, default_floor)?;
        let start = positive(START_STEP, DEFAULT_START_STEP)?;

        let frame_ms = match lookup(FRAME_DRAW_MS) {
            None => default_ms,
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: FRAME_DRAW_MS,
                    value,
                })?,
        };

        let cfg = Self {
            coeficient_bounds: min..=max,
            initial_formula: lookup(INITIAL_FORMULA).unwrap_or_default(),
            refine: RefineCfg::new(start, floor),
            frame_interval: Duration::from_millis(frame_ms),
        };
        log::info!(
            "{COEFICIENT_MIN}={min} {COEFICIENT_MAX}={max} floor={floor} frame={frame_ms}ms"
        );
        Ok(cfg)
    }

    /// An initial formula only counts when it has some substance to it.
    pub fn has_initial_formula(&self) -> bool {
        self.initial_formula.len() > 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = from(&[]).unwrap();
        assert_eq!(cfg.coeficient_bounds, -50.0..=50.0);
        assert!(cfg.initial_formula.is_empty());
        assert!(!cfg.has_initial_formula());
        assert_eq!(cfg.refine.start_step, 2.0);
        if !cfg!(windows) {
            assert_eq!(cfg.refine.floor_step, 0.0004);
            assert_eq!(cfg.frame_interval, Duration::from_millis(50));
        }
    }

    #[test]
    fn overrides() {
        let cfg = from(&[
            (COEFICIENT_MIN, "-5"),
            (COEFICIENT_MAX, " 5 "),
            (INITIAL_FORMULA, "(1*(x^2)) + 0 = 0"),
            (FLOOR_RESOLUTION, "0.01"),
            (START_STEP, "0.5"),
            (FRAME_DRAW_MS, "10"),
        ])
        .unwrap();
        assert_eq!(cfg.coeficient_bounds, -5.0..=5.0);
        assert!(cfg.has_initial_formula());
        assert_eq!(cfg.refine, RefineCfg::new(0.5, 0.01));
        assert_eq!(cfg.frame_interval, Duration::from_millis(10));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            from(&[(COEFICIENT_MIN, "lots")]),
            Err(ConfigError::InvalidNumber {
                key: COEFICIENT_MIN,
                value: "lots".into()
            })
        );
        assert_eq!(
            from(&[(COEFICIENT_MIN, "3"), (COEFICIENT_MAX, "3")]),
            Err(ConfigError::EmptyBounds { min: 3.0, max: 3.0 })
        );
        assert_eq!(
            from(&[(FLOOR_RESOLUTION, "0")]),
            Err(ConfigError::NonPositive {
                key: FLOOR_RESOLUTION,
                got: 0.0
            })
        );
    }
}
