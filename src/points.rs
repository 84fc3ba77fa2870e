// SPDX: CC0-1.0

//! Reference points, stored as a JSON array of `[x, y]` pairs.

use crate::{Number, Point};
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("failed to read reference points from {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed reference points in {path}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the reference set. A missing file is an empty set; a file that
/// exists but isn't a list of numeric lists is an error. Entries that are
/// not exactly two numbers long are dropped.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Point<Number>>, PointsError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no reference points at {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(PointsError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let points = parse(&text).map_err(|source| PointsError::Malformed {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("loaded {} reference points from {}", points.len(), path.display());
    Ok(points)
}

pub fn parse(text: &str) -> Result<Vec<Point<Number>>, serde_json::Error> {
    let raw: Vec<Vec<Number>> = serde_json::from_str(text)?;
    let total = raw.len();
    let points: Vec<_> = raw
        .into_iter()
        .filter_map(|pair| match pair[..] {
            [x, y] => Some(Point { x, y }),
            _ => None,
        })
        .collect();
    if points.len() != total {
        log::warn!(
            "ignored {} reference entries that are not [x, y] pairs",
            total - points.len()
        );
    }
    Ok(points)
}

/// Like [`load`], but a malformed file only costs a warning.
pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Point<Number>> {
    match load(path) {
        Ok(points) => points,
        Err(err) => {
            log::warn!("{err}, continuing without reference points");
            Vec::new()
        }
    }
}
