//! Core data model for Magick Script read settings.
//!
//! This crate provides the types shared by the XML front end, the directive
//! dispatcher and the command-line tool: parsed document nodes, the typed
//! values accepted by directives, the [`ReadSettings`] record they mutate, and
//! the capability traits behind which the native imaging library sits.
//!
//! # Core types
//!
//! - [`ConfigNode`]: a parsed element with attributes, children and text
//! - [`MagickColor`], [`Density`], [`MagickGeometry`], [`PixelMapping`]:
//!   structured attribute values
//! - [`ColorSpace`], [`MagickFormat`] and the other enumerations
//! - [`ReadSettings`], [`ReadDefines`], [`PixelStorageSettings`]: settings
//!   records
//! - [`ImagingBackend`], [`Image`], [`ImageHandle`], [`Channels`]: the
//!   imaging seam
//!
//! # Example
//!
//! ```
//! use mscript_core::{ColorSpace, MagickColor, ReadSettings};
//!
//! let mut settings = ReadSettings::default();
//! settings.background_color = Some("#00FF00".parse().expect("colour"));
//! settings.color_space = "sRGB".parse().expect("colour space");
//! assert_eq!(settings.background_color, Some(MagickColor::rgb(0, 255, 0)));
//! assert_eq!(settings.color_space, ColorSpace::Srgb);
//! ```

mod color;
mod defines;
mod density;
mod enums;
mod geometry;
mod imaging;
mod node;
mod pixel_storage;
mod read_settings;

pub use color::{ColorParseError, MagickColor};
pub use defines::{DefineKey, ReadDefines, flag_text};
pub use density::{Density, DensityParseError};
pub use enums::{
    ColorSpace, ColorType, CompressionMethod, Endian, FillRule, FontStyleType, FontWeight,
    Gravity, LineCap, LineJoin, MagickFormat, StorageType, TextDirection, TextEncoding,
};
pub use geometry::{GeometryParseError, MagickGeometry};
pub use imaging::{Channels, Image, ImageHandle, ImagingBackend, ImagingError};
pub use node::{Attribute, ConfigNode, ConfigNodeBuilder, NodeError};
pub use pixel_storage::{PixelMapping, PixelMappingError, PixelStorageSettings};
pub use read_settings::ReadSettings;

#[cfg(test)]
mod tests;
