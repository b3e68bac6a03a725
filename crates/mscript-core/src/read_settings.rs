//! Settings applied when an image is read.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::defines::flag_text;
use crate::{
    ColorSpace, ColorType, CompressionMethod, DefineKey, Density, Endian, FillRule, FontStyleType,
    FontWeight, Gravity, ImageHandle, LineCap, LineJoin, MagickColor, MagickFormat,
    MagickGeometry, PixelStorageSettings, ReadDefines, TextDirection, TextEncoding,
};

/// Mutable read configuration populated by `readSettings` directives.
///
/// Each public field corresponds to one directive. Format-scoped defines set
/// through `setDefine`, `setDefines` and `removeDefine` live in a separate
/// define map reachable through [`Self::define`] and [`Self::defines_map`].
///
/// # Example
///
/// ```
/// use mscript_core::{MagickFormat, ReadSettings};
///
/// let mut settings = ReadSettings::default();
/// settings.set_define(MagickFormat::Png, "bit-depth", "8");
/// assert_eq!(settings.define(MagickFormat::Png, "bit-depth"), Some("8"));
/// settings.remove_define(MagickFormat::Png, "bit-depth");
/// assert!(settings.defines_map().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadSettings {
    /// Background colour.
    pub background_color: Option<MagickColor>,
    /// Border colour.
    pub border_color: Option<MagickColor>,
    /// Colour space of the decoded image.
    pub color_space: ColorSpace,
    /// Image type.
    pub color_type: ColorType,
    /// Compression method.
    pub compression_method: CompressionMethod,
    /// Emit library debug output.
    pub debug: bool,
    /// Format-specific read defines.
    pub defines: Option<ReadDefines>,
    /// Resolution.
    pub density: Option<Density>,
    /// Byte order of raw data.
    pub endian: Endian,
    /// Fill colour.
    pub fill_color: Option<MagickColor>,
    /// Fill pattern image.
    pub fill_pattern: Option<ImageHandle>,
    /// Fill rule.
    pub fill_rule: FillRule,
    /// Font name or file.
    pub font: Option<String>,
    /// Font family.
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_pointsize: f64,
    /// Font style.
    pub font_style: FontStyleType,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Explicit input format.
    pub format: Option<MagickFormat>,
    /// Number of frames to read; unset reads all.
    pub frame_count: Option<i32>,
    /// First frame to read; unset starts at the beginning.
    pub frame_index: Option<i32>,
    /// Height hint for raw formats.
    pub height: Option<i32>,
    /// Page geometry.
    pub page: Option<MagickGeometry>,
    /// Raw pixel storage layout.
    pub pixel_storage: Option<PixelStorageSettings>,
    /// Antialias strokes.
    pub stroke_anti_alias: bool,
    /// Stroke colour.
    pub stroke_color: Option<MagickColor>,
    /// Stroke dash pattern.
    pub stroke_dash_array: Option<Vec<f64>>,
    /// Offset into the dash pattern.
    pub stroke_dash_offset: f64,
    /// Stroke line cap.
    pub stroke_line_cap: LineCap,
    /// Stroke line join.
    pub stroke_line_join: LineJoin,
    /// Stroke miter limit.
    pub stroke_miter_limit: i32,
    /// Stroke pattern image.
    pub stroke_pattern: Option<ImageHandle>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Antialias text.
    pub text_anti_alias: bool,
    /// Text direction.
    pub text_direction: TextDirection,
    /// Text encoding.
    pub text_encoding: TextEncoding,
    /// Text gravity.
    pub text_gravity: Gravity,
    /// Spacing between lines.
    pub text_interline_spacing: f64,
    /// Spacing between words.
    pub text_interword_spacing: f64,
    /// Spacing between letters.
    pub text_kerning: f64,
    /// Colour drawn under text.
    pub text_under_color: Option<MagickColor>,
    /// Read as monochrome.
    pub use_monochrome: bool,
    /// Emit verbose information.
    pub verbose: bool,
    /// Width hint for raw formats.
    pub width: Option<i32>,
    #[serde(rename = "setDefines", serialize_with = "serialize_define_map")]
    define_map: BTreeMap<DefineKey, String>,
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            background_color: None,
            border_color: None,
            color_space: ColorSpace::default(),
            color_type: ColorType::default(),
            compression_method: CompressionMethod::default(),
            debug: false,
            defines: None,
            density: None,
            endian: Endian::default(),
            fill_color: None,
            fill_pattern: None,
            fill_rule: FillRule::default(),
            font: None,
            font_family: None,
            font_pointsize: 0.0,
            font_style: FontStyleType::default(),
            font_weight: FontWeight::default(),
            format: None,
            frame_count: None,
            frame_index: None,
            height: None,
            page: None,
            pixel_storage: None,
            stroke_anti_alias: true,
            stroke_color: None,
            stroke_dash_array: None,
            stroke_dash_offset: 0.0,
            stroke_line_cap: LineCap::default(),
            stroke_line_join: LineJoin::default(),
            stroke_miter_limit: 10,
            stroke_pattern: None,
            stroke_width: 1.0,
            text_anti_alias: true,
            text_direction: TextDirection::default(),
            text_encoding: TextEncoding::default(),
            text_gravity: Gravity::default(),
            text_interline_spacing: 0.0,
            text_interword_spacing: 0.0,
            text_kerning: 0.0,
            text_under_color: None,
            use_monochrome: false,
            verbose: false,
            width: None,
            define_map: BTreeMap::new(),
        }
    }
}

impl ReadSettings {
    /// Sets a string define, replacing any previous value.
    pub fn set_define(
        &mut self,
        format: MagickFormat,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.define_map
            .insert(DefineKey::new(format, name), value.into());
    }

    /// Sets a boolean define, stored as `true` or `false`.
    pub fn set_define_flag(&mut self, format: MagickFormat, name: impl Into<String>, flag: bool) {
        self.set_define(format, name, flag_text(flag));
    }

    /// Merges every entry of a define bundle.
    pub fn set_defines(&mut self, defines: &ReadDefines) {
        for (key, value) in defines.iter() {
            self.define_map.insert(key, value.to_owned());
        }
    }

    /// Removes a define; returns the previous value when one was set.
    pub fn remove_define(&mut self, format: MagickFormat, name: &str) -> Option<String> {
        self.define_map.remove(&DefineKey::new(format, name))
    }

    /// Looks up a define.
    #[must_use]
    pub fn define(&self, format: MagickFormat, name: &str) -> Option<&str> {
        self.define_map
            .get(&DefineKey::new(format, name))
            .map(String::as_str)
    }

    /// Returns the define map ordered by key.
    #[must_use]
    pub const fn defines_map(&self) -> &BTreeMap<DefineKey, String> {
        &self.define_map
    }
}

fn serialize_define_map<S: Serializer>(
    map: &BTreeMap<DefineKey, String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(key, value)| (key.to_string(), value)))
}
