//! Typed extraction of directive attributes.
//!
//! Attribute text is first resolved against the script variables, then
//! parsed into the requested [`AttributeValue`]. Failures name the directive,
//! the attribute key, the text that was rejected and the expected type.

use std::borrow::Cow;
use std::str::FromStr;

use mscript_core::{
    ColorSpace, ColorType, CompressionMethod, ConfigNode, Density, Endian, FillRule,
    FontStyleType, FontWeight, Gravity, LineCap, LineJoin, MagickColor, MagickFormat,
    MagickGeometry, PixelMapping, StorageType, TextDirection, TextEncoding,
};

use crate::{DispatchContext, DispatchError, Variables};

/// A type that can be read from attribute text.
pub trait AttributeValue: Sized {
    /// Name used in parse error messages.
    const TYPE_NAME: &'static str;

    /// Parses attribute text.
    ///
    /// # Errors
    ///
    /// Returns a diagnostic describing why the text was rejected.
    fn parse_attribute(raw: &str) -> Result<Self, String>;
}

macro_rules! attribute_value_from_str {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl AttributeValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn parse_attribute(raw: &str) -> Result<Self, String> {
                    <$ty as FromStr>::from_str(raw).map_err(|error| error.to_string())
                }
            }
        )+
    };
}

attribute_value_from_str!(
    bool => "boolean",
    f64 => "double",
    i32 => "integer",
    String => "string",
    MagickColor => "colour",
    Density => "density",
    MagickGeometry => "geometry",
    PixelMapping => "pixel mapping",
    ColorSpace => "ColorSpace",
    ColorType => "ColorType",
    CompressionMethod => "CompressionMethod",
    Endian => "Endian",
    FillRule => "FillRule",
    FontStyleType => "FontStyleType",
    FontWeight => "FontWeight",
    Gravity => "Gravity",
    LineCap => "LineCap",
    LineJoin => "LineJoin",
    MagickFormat => "MagickFormat",
    StorageType => "StorageType",
    TextDirection => "TextDirection",
    TextEncoding => "TextEncoding",
);

/// Resolves a whole-value `{$name}` reference against the variables.
fn substitute<'n>(
    node: &ConfigNode,
    key: &str,
    raw: &'n str,
    variables: &'n Variables,
) -> Result<Cow<'n, str>, DispatchError> {
    match Variables::reference(raw) {
        None => Ok(Cow::Borrowed(raw)),
        Some(name) => variables
            .get(name)
            .map(Cow::Borrowed)
            .ok_or_else(|| DispatchError::undefined_variable(node.name(), key, name)),
    }
}

fn parse_value<T: AttributeValue>(
    node: &ConfigNode,
    key: &str,
    text: &str,
) -> Result<T, DispatchError> {
    T::parse_attribute(text).map_err(|reason| {
        DispatchError::attribute_parse(node.name(), key, text, T::TYPE_NAME, reason)
    })
}

/// Parses an attribute that must be present.
///
/// # Errors
///
/// Returns [`DispatchError::MissingAttribute`] when the attribute is absent,
/// [`DispatchError::UndefinedVariable`] for an unknown variable reference and
/// [`DispatchError::AttributeParse`] when the text does not parse.
pub fn required<T: AttributeValue>(
    node: &ConfigNode,
    key: &str,
    context: &DispatchContext<'_>,
) -> Result<T, DispatchError> {
    optional(node, key, context)?
        .ok_or_else(|| DispatchError::missing_attribute(node.name(), key))
}

/// Parses an attribute that may be absent.
///
/// # Errors
///
/// Returns [`DispatchError::UndefinedVariable`] for an unknown variable
/// reference and [`DispatchError::AttributeParse`] when the text does not
/// parse.
pub fn optional<T: AttributeValue>(
    node: &ConfigNode,
    key: &str,
    context: &DispatchContext<'_>,
) -> Result<Option<T>, DispatchError> {
    let Some(raw) = node.attribute(key) else {
        return Ok(None);
    };
    let text = substitute(node, key, raw, context.variables())?;
    parse_value(node, key, &text).map(Some)
}

/// Parses an optional integer where an absent or blank attribute means
/// "unset". Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`DispatchError::UndefinedVariable`] for an unknown variable
/// reference and [`DispatchError::AttributeParse`] when non-empty text is
/// not an integer.
pub fn nullable_int(
    node: &ConfigNode,
    key: &str,
    context: &DispatchContext<'_>,
) -> Result<Option<i32>, DispatchError> {
    let Some(raw) = node.attribute(key) else {
        return Ok(None);
    };
    let text = substitute(node, key, raw, context.variables())?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_value(node, key, trimmed).map(Some)
}
