//! Declarative directive dispatch for Magick Script documents.
//!
//! A `readSettings` section of a script lists directives such as
//! `<backgroundColor value="red"/>` or
//! `<setDefine format="png" name="bit-depth" value="8"/>`. This crate maps
//! each directive element to a handler through an exact-match
//! [`DirectiveRegistry`], parses its attributes into typed values and
//! applies them to a [`ReadSettings`] record.
//!
//! # Example
//!
//! ```
//! use mscript::{DispatchContext, read_settings_registry};
//! use mscript_core::{ConfigNode, MagickFormat, ReadSettings};
//!
//! let node = ConfigNode::builder("setDefine")
//!     .attribute("format", "png")
//!     .attribute("name", "bit-depth")
//!     .attribute("value", "8")
//!     .build()
//!     .expect("node");
//! let mut settings = ReadSettings::default();
//! read_settings_registry()
//!     .dispatch(&node, &mut settings, &DispatchContext::default())
//!     .expect("valid directive");
//! assert_eq!(settings.define(MagickFormat::Png, "bit-depth"), Some("8"));
//! ```

pub mod attributes;
mod directives;
mod errors;
mod registry;
mod script;
mod variables;

pub use attributes::AttributeValue;
pub use directives::{
    DEFINES_SECTION, PIXEL_STORAGE_SECTION, READ_SETTINGS_SECTION, build_defines,
    build_pixel_storage, defines_registry, pixel_storage_registry, read_settings_registry,
};
pub use errors::{DispatchError, RegistryError};
pub use registry::{DirectiveRegistry, DispatchContext, Handler};
pub use script::{Script, ScriptError};
pub use variables::Variables;

#[cfg(test)]
mod tests;
