//! Script documents and the `readSettings` walker.

use mscript_core::{ConfigNode, ImageHandle, ImagingBackend, ImagingError, ReadSettings};
use mscript_xml::{XmlError, parse_document};
use thiserror::Error;
use tracing::debug;

use crate::directives::{READ_SETTINGS_SECTION, read_settings_registry};
use crate::{DispatchContext, DispatchError, Variables};

/// Tracing target for script evaluation.
pub(crate) const SCRIPT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::script");

/// Errors surfaced while loading or evaluating a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The script text is not a valid document.
    #[error("failed to parse script: {0}")]
    Xml(#[from] XmlError),
    /// A directive was rejected.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The imaging backend failed.
    #[error(transparent)]
    Imaging(#[from] ImagingError),
}

/// A parsed script together with its variables.
///
/// # Example
///
/// ```
/// use mscript::Script;
/// use mscript_core::MagickColor;
///
/// let mut script = Script::parse(
///     r#"<msl><read><readSettings>
///          <backgroundColor value="{$bg}"/>
///        </readSettings></read></msl>"#,
/// )
/// .expect("valid script");
/// script.variables_mut().insert("bg", "red");
///
/// let section = script.read_settings_sections().next().expect("section");
/// let settings = script.build_read_settings(section, None).expect("settings");
/// assert_eq!(settings.background_color, Some(MagickColor::rgb(255, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    root: ConfigNode,
    variables: Variables,
}

impl Script {
    /// Parses script text.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Xml`] when the text is not a well-formed
    /// document.
    pub fn parse(xml: &str) -> Result<Self, ScriptError> {
        Ok(Self::from_root(parse_document(xml)?))
    }

    /// Wraps an already parsed document.
    #[must_use]
    pub fn from_root(root: ConfigNode) -> Self {
        Self {
            root,
            variables: Variables::new(),
        }
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> &ConfigNode {
        &self.root
    }

    /// Returns the variables substituted into attribute values.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the variables for modification.
    pub const fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    /// Iterates every `readSettings` element in document order.
    pub fn read_settings_sections(&self) -> impl Iterator<Item = &ConfigNode> {
        self.root
            .descendants()
            .filter(|node| node.name() == READ_SETTINGS_SECTION)
    }

    /// Builds read settings from the defaults and the children of `section`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DispatchError`] raised by a child.
    pub fn build_read_settings(
        &self,
        section: &ConfigNode,
        imaging: Option<&dyn ImagingBackend>,
    ) -> Result<ReadSettings, DispatchError> {
        let mut settings = ReadSettings::default();
        self.apply_read_settings(section, &mut settings, imaging)?;
        Ok(settings)
    }

    /// Applies the children of `section` to existing settings.
    ///
    /// Children applied before a failing one stay applied.
    ///
    /// # Errors
    ///
    /// Returns the first [`DispatchError`] raised by a child.
    pub fn apply_read_settings(
        &self,
        section: &ConfigNode,
        settings: &mut ReadSettings,
        imaging: Option<&dyn ImagingBackend>,
    ) -> Result<(), DispatchError> {
        debug!(
            target: SCRIPT_TARGET,
            section = section.name(),
            directives = section.children().len(),
            variables = self.variables.len(),
            "applying read settings"
        );
        let mut context = DispatchContext::new(&self.variables);
        if let Some(backend) = imaging {
            context = context.with_imaging(backend);
        }
        read_settings_registry().dispatch_children(section, settings, &context)
    }

    /// Builds settings for `section` and decodes `data` with them.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Dispatch`] when the section is invalid and
    /// [`ScriptError::Imaging`] when the backend cannot decode the data.
    pub fn read_image(
        &self,
        section: &ConfigNode,
        data: &[u8],
        backend: &dyn ImagingBackend,
    ) -> Result<ImageHandle, ScriptError> {
        let settings = self.build_read_settings(section, Some(backend))?;
        debug!(
            target: SCRIPT_TARGET,
            bytes = data.len(),
            format = ?settings.format,
            "decoding image"
        );
        Ok(backend.decode_image(data, &settings)?)
    }
}
