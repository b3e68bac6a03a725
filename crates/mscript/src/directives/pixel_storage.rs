//! Nested registry for `pixelStorage` elements.

use mscript_core::{ConfigNode, PixelStorageSettings};
use once_cell::sync::Lazy;

use crate::attributes::required;
use crate::{DirectiveRegistry, DispatchContext, DispatchError, Handler};

/// Section name of the pixel-storage registry.
pub const PIXEL_STORAGE_SECTION: &str = "pixelStorage";

pub(crate) const PIXEL_STORAGE_DIRECTIVES: &[(&str, Handler<PixelStorageSettings>)] =
    &[("mapping", mapping), ("storageType", storage_type)];

static PIXEL_STORAGE: Lazy<DirectiveRegistry<PixelStorageSettings>> = Lazy::new(|| {
    DirectiveRegistry::from_table(PIXEL_STORAGE_SECTION, PIXEL_STORAGE_DIRECTIVES)
});

/// Returns the registry for children of a `pixelStorage` element.
#[must_use]
pub fn pixel_storage_registry() -> &'static DirectiveRegistry<PixelStorageSettings> {
    &PIXEL_STORAGE
}

/// Builds pixel storage settings from the children of `node`.
///
/// # Errors
///
/// Returns the first error raised by a child.
pub fn build_pixel_storage(
    node: &ConfigNode,
    context: &DispatchContext<'_>,
) -> Result<PixelStorageSettings, DispatchError> {
    let mut storage = PixelStorageSettings::default();
    PIXEL_STORAGE.dispatch_children(node, &mut storage, context)?;
    Ok(storage)
}

fn mapping(
    node: &ConfigNode,
    storage: &mut PixelStorageSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    storage.mapping = Some(required(node, "value", context)?);
    Ok(())
}

fn storage_type(
    node: &ConfigNode,
    storage: &mut PixelStorageSettings,
    context: &DispatchContext<'_>,
) -> Result<(), DispatchError> {
    storage.storage_type = required(node, "value", context)?;
    Ok(())
}
