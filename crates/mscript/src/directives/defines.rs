//! Nested registry for `defines` bundles.
//!
//! ```xml
//! <defines format="jpeg">
//!   <define name="size" value="128x128"/>
//!   <define name="fancy-upsampling" flag="false"/>
//! </defines>
//! ```

use mscript_core::{ConfigNode, MagickFormat, ReadDefines};
use once_cell::sync::Lazy;

use crate::attributes::{optional, required};
use crate::{DirectiveRegistry, DispatchContext, DispatchError, Handler};

/// Section name of the defines registry.
pub const DEFINES_SECTION: &str = "defines";

const ACCEPTED_SHAPES: &[&[&str]] = &[&["name", "value"], &["name", "flag"]];

pub(crate) const DEFINES_DIRECTIVES: &[(&str, Handler<ReadDefines>)] = &[("define", define)];

static DEFINES: Lazy<DirectiveRegistry<ReadDefines>> =
    Lazy::new(|| DirectiveRegistry::from_table(DEFINES_SECTION, DEFINES_DIRECTIVES));

/// Returns the registry for children of a `defines` element.
#[must_use]
pub fn defines_registry() -> &'static DirectiveRegistry<ReadDefines> {
    &DEFINES
}

/// Builds a define bundle from a `defines` element.
///
/// The element's `format` attribute selects the format; each child is
/// dispatched through [`defines_registry`].
///
/// # Errors
///
/// Returns [`DispatchError::MissingAttribute`] when `format` is absent, or
/// the first error raised by a child.
pub fn build_defines(
    node: &ConfigNode,
    context: &DispatchContext<'_>,
) -> Result<ReadDefines, DispatchError> {
    let format: MagickFormat = required(node, "format", context)?;
    let mut defines = ReadDefines::new(format);
    DEFINES.dispatch_children(node, &mut defines, context)?;
    Ok(defines)
}

fn define(
    node: &ConfigNode,
    defines: &mut ReadDefines,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    match (
        optional::<String>(node, "name", context)?,
        optional::<String>(node, "value", context)?,
        optional::<bool>(node, "flag", context)?,
    ) {
        (Some(name), Some(value), None) => defines.insert(name, value),
        (Some(name), None, Some(flag)) => defines.insert_flag(name, flag),
        _ => {
            return Err(DispatchError::invalid_argument_combination(
                node.name(),
                ACCEPTED_SHAPES,
            ));
        }
    }
    Ok(())
}
