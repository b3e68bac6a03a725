//! Page geometry in ImageMagick's `WxH+X+Y` notation.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static GEOMETRY_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(?P<width>[0-9]+)?(?:[xX](?P<height>[0-9]+)?)?(?:(?P<x>[+-][0-9]+)(?P<y>[+-][0-9]+)?)?$").ok()
});

/// Size and offset with optional resize flags.
///
/// # Example
///
/// ```
/// use mscript_core::MagickGeometry;
///
/// let page: MagickGeometry = "640x480+10-5!".parse().expect("geometry");
/// assert_eq!((page.width, page.height, page.x, page.y), (640, 480, 10, -5));
/// assert!(page.ignore_aspect_ratio);
/// assert_eq!(page.to_string(), "640x480+10-5!");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MagickGeometry {
    /// Width in pixels (or percent when [`Self::is_percentage`]).
    pub width: u32,
    /// Height in pixels (or percent when [`Self::is_percentage`]).
    pub height: u32,
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// `%`: width and height are percentages.
    pub is_percentage: bool,
    /// `!`: resize to exactly width and height.
    pub ignore_aspect_ratio: bool,
    /// `<`: only enlarge smaller images.
    pub less: bool,
    /// `>`: only shrink larger images.
    pub greater: bool,
    /// `^`: fill the area, cropping as needed.
    pub fill_area: bool,
    /// `@`: width is a pixel-count limit.
    pub limit_pixels: bool,
}

impl MagickGeometry {
    /// Builds a plain `WxH` geometry.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Returns the geometry with the given offset.
    #[must_use]
    pub const fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    fn flags(&self) -> [(char, bool); 6] {
        [
            ('%', self.is_percentage),
            ('!', self.ignore_aspect_ratio),
            ('<', self.less),
            ('>', self.greater),
            ('^', self.fill_area),
            ('@', self.limit_pixels),
        ]
    }
}

/// Error returned for malformed geometry text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid geometry '{input}'")]
pub struct GeometryParseError {
    input: String,
}

impl FromStr for MagickGeometry {
    type Err = GeometryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || GeometryParseError {
            input: s.to_owned(),
        };
        let mut geometry = Self::default();
        let mut body = String::with_capacity(s.len());
        for c in s.trim().chars() {
            match c {
                '%' => geometry.is_percentage = true,
                '!' => geometry.ignore_aspect_ratio = true,
                '<' => geometry.less = true,
                '>' => geometry.greater = true,
                '^' => geometry.fill_area = true,
                '@' => geometry.limit_pixels = true,
                other => body.push(other),
            }
        }
        if body.is_empty() {
            return Err(error());
        }

        let pattern = GEOMETRY_PATTERN.as_ref().ok_or_else(error)?;
        let captures = pattern.captures(&body).ok_or_else(error)?;
        let number = |name: &str| -> Result<Option<i64>, GeometryParseError> {
            captures
                .name(name)
                .map(|m| m.as_str().parse::<i64>().map_err(|_| error()))
                .transpose()
        };
        let unsigned = |value: Option<i64>| {
            value
                .map(|v| u32::try_from(v).map_err(|_| error()))
                .transpose()
        };
        let signed = |value: Option<i64>| {
            value
                .map(|v| i32::try_from(v).map_err(|_| error()))
                .transpose()
        };

        let width = unsigned(number("width")?)?;
        let height = unsigned(number("height")?)?;
        let x = signed(number("x")?)?;
        if width.is_none() && height.is_none() && x.is_none() {
            return Err(error());
        }
        geometry.width = width.unwrap_or_default();
        geometry.height = height.or(width).unwrap_or_default();
        geometry.x = x.unwrap_or_default();
        geometry.y = signed(number("y")?)?.unwrap_or_default();
        Ok(geometry)
    }
}

impl fmt::Display for MagickGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.x != 0 || self.y != 0 {
            write!(f, "{:+}{:+}", self.x, self.y)?;
        }
        for (flag, set) in self.flags() {
            if set {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for MagickGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
