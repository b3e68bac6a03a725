//! Directive handlers for `readSettings` sections.
//!
//! Most directives read a single `value` attribute into one field of
//! [`ReadSettings`]. The define directives take several named attributes,
//! `defines`, `setDefines` and `pixelStorage` descend into nested registries,
//! and the pattern directives ask the imaging backend to build an image.

mod defines;
mod pixel_storage;

use mscript_core::{ConfigNode, MagickFormat, ReadSettings};
use once_cell::sync::Lazy;

use crate::attributes::{nullable_int, optional, required};
use crate::{DirectiveRegistry, DispatchContext, DispatchError, Handler};

#[cfg(test)]
pub(crate) use defines::DEFINES_DIRECTIVES;
pub use defines::{DEFINES_SECTION, build_defines, defines_registry};
#[cfg(test)]
pub(crate) use pixel_storage::PIXEL_STORAGE_DIRECTIVES;
pub use pixel_storage::{PIXEL_STORAGE_SECTION, build_pixel_storage, pixel_storage_registry};

/// Section name of the read-settings registry.
pub const READ_SETTINGS_SECTION: &str = "readSettings";

const VALUE: &str = "value";

const SET_DEFINE_SHAPES: &[&[&str]] = &[&["format", "name", "flag"], &["format", "name", "value"]];

pub(crate) const READ_SETTINGS_DIRECTIVES: &[(&str, Handler<ReadSettings>)] = &[
    ("backgroundColor", background_color),
    ("borderColor", border_color),
    ("colorSpace", color_space),
    ("colorType", color_type),
    ("compressionMethod", compression_method),
    ("debug", debug),
    ("defines", defines),
    ("density", density),
    ("endian", endian),
    ("fillColor", fill_color),
    ("fillPattern", fill_pattern),
    ("fillRule", fill_rule),
    ("font", font),
    ("fontFamily", font_family),
    ("fontPointsize", font_pointsize),
    ("fontStyle", font_style),
    ("fontWeight", font_weight),
    ("format", format),
    ("frameCount", frame_count),
    ("frameIndex", frame_index),
    ("height", height),
    ("page", page),
    ("pixelStorage", pixel_storage),
    ("removeDefine", remove_define),
    ("setDefine", set_define),
    ("setDefines", set_defines),
    ("strokeAntiAlias", stroke_anti_alias),
    ("strokeColor", stroke_color),
    ("strokeDashArray", stroke_dash_array),
    ("strokeDashOffset", stroke_dash_offset),
    ("strokeLineCap", stroke_line_cap),
    ("strokeLineJoin", stroke_line_join),
    ("strokeMiterLimit", stroke_miter_limit),
    ("strokePattern", stroke_pattern),
    ("strokeWidth", stroke_width),
    ("textAntiAlias", text_anti_alias),
    ("textDirection", text_direction),
    ("textEncoding", text_encoding),
    ("textGravity", text_gravity),
    ("textInterlineSpacing", text_interline_spacing),
    ("textInterwordSpacing", text_interword_spacing),
    ("textKerning", text_kerning),
    ("textUnderColor", text_under_color),
    ("useMonochrome", use_monochrome),
    ("verbose", verbose),
    ("width", width),
];

static READ_SETTINGS: Lazy<DirectiveRegistry<ReadSettings>> =
    Lazy::new(|| DirectiveRegistry::from_table(READ_SETTINGS_SECTION, READ_SETTINGS_DIRECTIVES));

/// Returns the registry for children of a `readSettings` element.
#[must_use]
pub fn read_settings_registry() -> &'static DirectiveRegistry<ReadSettings> {
    &READ_SETTINGS
}

/// Defines handlers that assign the `value` attribute to the field of the
/// same name.
///
/// `set` stores the parsed value, `some` wraps it in `Some`, and `nullable`
/// treats an absent or empty attribute as unset.
macro_rules! value_directives {
    (@read set, $node:ident, $context:ident) => {
        required($node, VALUE, $context)?
    };
    (@read some, $node:ident, $context:ident) => {
        Some(required($node, VALUE, $context)?)
    };
    (@read nullable, $node:ident, $context:ident) => {
        nullable_int($node, VALUE, $context)?
    };
    ($($field:ident: $mode:ident),+ $(,)?) => {
        $(
            fn $field(
                node: &ConfigNode,
                settings: &mut ReadSettings,
                context: &DispatchContext<'_>,
            ) -> Result<(), DispatchError> {
                settings.$field = value_directives!(@read $mode, node, context);
                Ok(())
            }
        )+
    };
}

value_directives! {
    background_color: some,
    border_color: some,
    color_space: set,
    color_type: set,
    compression_method: set,
    debug: set,
    density: some,
    endian: set,
    fill_color: some,
    fill_rule: set,
    font: some,
    font_family: some,
    font_pointsize: set,
    font_style: set,
    font_weight: set,
    format: some,
    frame_count: nullable,
    frame_index: nullable,
    height: nullable,
    page: some,
    stroke_anti_alias: set,
    stroke_color: some,
    stroke_dash_offset: set,
    stroke_line_cap: set,
    stroke_line_join: set,
    stroke_miter_limit: set,
    stroke_width: set,
    text_anti_alias: set,
    text_direction: set,
    text_encoding: set,
    text_gravity: set,
    text_interline_spacing: set,
    text_interword_spacing: set,
    text_kerning: set,
    text_under_color: some,
    use_monochrome: set,
    verbose: set,
    width: nullable,
}

fn defines(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    settings.defines = Some(build_defines(node, context)?);
    Ok(())
}

fn set_defines(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    let child = node
        .child(DEFINES_SECTION)
        .ok_or_else(|| DispatchError::missing_child(node.name(), DEFINES_SECTION))?;
    settings.set_defines(&build_defines(child, context)?);
    Ok(())
}

fn pixel_storage(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    settings.pixel_storage = Some(build_pixel_storage(node, context)?);
    Ok(())
}

fn remove_define(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    let format: MagickFormat = required(node, "format", context)?;
    let name: String = required(node, "name", context)?;
    settings.remove_define(format, &name);
    Ok(())
}

/// Attributes recognised by `setDefine`; anything else is ignored.
#[derive(Debug, Default)]
struct SetDefineArguments {
    flag: Option<bool>,
    format: Option<MagickFormat>,
    name: Option<String>,
    value: Option<String>,
}

impl SetDefineArguments {
    fn parse(node: &ConfigNode, context: &DispatchContext<'_>) -> Result<Self, DispatchError> {
        Ok(Self {
            flag: optional(node, "flag", context)?,
            format: optional(node, "format", context)?,
            name: optional(node, "name", context)?,
            value: optional(node, "value", context)?,
        })
    }
}

fn set_define(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    match SetDefineArguments::parse(node, context)? {
        SetDefineArguments {
            flag: Some(flag),
            format: Some(format),
            name: Some(name),
            value: None,
        } => settings.set_define_flag(format, name, flag),
        SetDefineArguments {
            flag: None,
            format: Some(format),
            name: Some(name),
            value: Some(value),
        } => settings.set_define(format, name, value),
        SetDefineArguments { .. } => {
            return Err(DispatchError::invalid_argument_combination(
                node.name(),
                SET_DEFINE_SHAPES,
            ));
        }
    }
    Ok(())
}

fn stroke_dash_array(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    let dashes = node
        .children()
        .iter()
        .map(|child| required::<f64>(child, VALUE, context))
        .collect::<Result<Vec<_>, _>>()?;
    settings.stroke_dash_array = Some(dashes);
    Ok(())
}

fn fill_pattern(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    let imaging = context.require_imaging(node.name())?;
    let pattern = imaging
        .build_image_from_node(node)
        .map_err(|error| DispatchError::imaging(node.name(), error))?;
    settings.fill_pattern = Some(pattern);
    Ok(())
}

fn stroke_pattern(
    node: &ConfigNode,
    settings: &mut ReadSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    let imaging = context.require_imaging(node.name())?;
    let pattern = imaging
        .build_image_from_node(node)
        .map_err(|error| DispatchError::imaging(node.name(), error))?;
    settings.stroke_pattern = Some(pattern);
    Ok(())
}
