//! RGBA colour literals.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// An 8-bit-per-channel RGBA colour.
///
/// Parses named colours, hexadecimal literals and functional `rgb()` /
/// `rgba()` notation, where the `rgba()` alpha is a fraction in `0..=1` or a
/// percentage. Displays as `#RRGGBBAA`, which parses back to the same
/// value.
///
/// # Example
///
/// ```
/// use mscript_core::MagickColor;
///
/// let red: MagickColor = "red".parse().expect("named colour");
/// assert_eq!(red, MagickColor::rgba(255, 0, 0, 255));
/// assert_eq!(red.to_string(), "#FF0000FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagickColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is opaque.
    pub a: u8,
}

impl MagickColor {
    /// Builds an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Builds a colour with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, the value of `none` and `transparent`.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }
}

/// Error returned when text is not a recognised colour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised colour '{input}'")]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

const NAMED_COLORS: &[(&str, MagickColor)] = &[
    ("aqua", MagickColor::rgb(0, 255, 255)),
    ("black", MagickColor::rgb(0, 0, 0)),
    ("blue", MagickColor::rgb(0, 0, 255)),
    ("brown", MagickColor::rgb(165, 42, 42)),
    ("cyan", MagickColor::rgb(0, 255, 255)),
    ("fuchsia", MagickColor::rgb(255, 0, 255)),
    ("gold", MagickColor::rgb(255, 215, 0)),
    ("gray", MagickColor::rgb(126, 126, 126)),
    ("green", MagickColor::rgb(0, 128, 0)),
    ("grey", MagickColor::rgb(190, 190, 190)),
    ("indigo", MagickColor::rgb(75, 0, 130)),
    ("lime", MagickColor::rgb(0, 255, 0)),
    ("magenta", MagickColor::rgb(255, 0, 255)),
    ("maroon", MagickColor::rgb(128, 0, 0)),
    ("navy", MagickColor::rgb(0, 0, 128)),
    ("none", MagickColor::transparent()),
    ("olive", MagickColor::rgb(128, 128, 0)),
    ("orange", MagickColor::rgb(255, 165, 0)),
    ("pink", MagickColor::rgb(255, 192, 203)),
    ("purple", MagickColor::rgb(128, 0, 128)),
    ("red", MagickColor::rgb(255, 0, 0)),
    ("silver", MagickColor::rgb(192, 192, 192)),
    ("teal", MagickColor::rgb(0, 128, 128)),
    ("transparent", MagickColor::transparent()),
    ("violet", MagickColor::rgb(238, 130, 238)),
    ("white", MagickColor::rgb(255, 255, 255)),
    ("yellow", MagickColor::rgb(255, 255, 0)),
];

impl FromStr for MagickColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = if let Some(hex) = text.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = functional_args(text, "rgba") {
            parse_functional(args, true)
        } else if let Some(args) = functional_args(text, "rgb") {
            parse_functional(args, false)
        } else {
            NAMED_COLORS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(text))
                .map(|(_, color)| *color)
        };
        parsed.ok_or_else(|| ColorParseError::new(s))
    }
}

fn parse_hex(hex: &str) -> Option<MagickColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let short = |index: usize| {
        let digit = u8::from_str_radix(hex.get(index..=index)?, 16).ok()?;
        Some(digit * 17)
    };
    let long = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
    match hex.len() {
        3 => Some(MagickColor::rgb(short(0)?, short(1)?, short(2)?)),
        4 => Some(MagickColor::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(MagickColor::rgb(long(0)?, long(2)?, long(4)?)),
        8 => Some(MagickColor::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => None,
    }
}

fn functional_args<'a>(text: &'a str, function: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(function)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<MagickColor> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match (with_alpha, parts.as_slice()) {
        (false, [r, g, b]) => Some(MagickColor::rgb(
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
        )),
        (true, [r, g, b, a]) => Some(MagickColor::rgba(
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
            parse_alpha(a)?,
        )),
        _ => None,
    }
}

/// Alpha is a fraction in `0..=1` (`1` is opaque) or a percentage such as
/// `50%`.
#[expect(
    clippy::float_arithmetic,
    reason = "alpha is scaled from a fraction to the 8-bit channel range"
)]
fn parse_alpha(text: &str) -> Option<u8> {
    let fraction = match text.strip_suffix('%') {
        Some(percent) => percent.trim_end().parse::<f64>().ok()? / 100.0,
        None => text.parse::<f64>().ok()?,
    };
    if !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    let scaled = (fraction * 255.0).round();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "fraction is range-checked to 0..=1 so the scaled value fits in u8"
    )]
    let alpha = scaled as u8;
    Some(alpha)
}

impl fmt::Display for MagickColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for MagickColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
