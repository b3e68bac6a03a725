//! Horizontal and vertical resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Image resolution as `X` or `XxY`.
///
/// A single number applies to both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    /// Horizontal resolution.
    pub x: f64,
    /// Vertical resolution.
    pub y: f64,
}

impl Density {
    /// Builds a density with independent axes.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a density with the same value on both axes.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }
}

/// Error returned for malformed density text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid density '{input}', expected X or XxY")]
pub struct DensityParseError {
    input: String,
}

impl FromStr for Density {
    type Err = DensityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || DensityParseError {
            input: s.to_owned(),
        };
        let parse_axis = |text: &str| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or_else(error)
        };
        match s.split_once(['x', 'X']) {
            Some((x, y)) => Ok(Self::new(parse_axis(x)?, parse_axis(y)?)),
            None => Ok(Self::uniform(parse_axis(s)?)),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl Serialize for Density {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
