//! Exact-match directive registries.
//!
//! A [`DirectiveRegistry`] maps element names to handler functions for one
//! section of a script. Registries are built once from static tables and are
//! read-only afterwards, so a single instance can be shared across threads.

use std::collections::HashMap;
use std::fmt;

use mscript_core::{ConfigNode, ImagingBackend};

use crate::{DispatchError, RegistryError, Variables};

/// Handler invoked for one directive element.
pub type Handler<T> = fn(&ConfigNode, &mut T, &DispatchContext<'_>) -> Result<(), DispatchError>;

static NO_VARIABLES: Variables = Variables::new();

/// Collaborators available to handlers during a dispatch.
#[derive(Clone, Copy)]
pub struct DispatchContext<'a> {
    variables: &'a Variables,
    imaging: Option<&'a dyn ImagingBackend>,
}

impl<'a> DispatchContext<'a> {
    /// Creates a context with the given variables and no imaging backend.
    #[must_use]
    pub const fn new(variables: &'a Variables) -> Self {
        Self {
            variables,
            imaging: None,
        }
    }

    /// Attaches an imaging backend.
    #[must_use]
    pub const fn with_imaging(mut self, imaging: &'a dyn ImagingBackend) -> Self {
        self.imaging = Some(imaging);
        self
    }

    /// Returns the variable table.
    #[must_use]
    pub const fn variables(&self) -> &'a Variables {
        self.variables
    }

    /// Returns the imaging backend, if one was attached.
    #[must_use]
    pub const fn imaging(&self) -> Option<&'a dyn ImagingBackend> {
        self.imaging
    }

    /// Returns the imaging backend or fails on behalf of `directive`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ImagingUnavailable`] when no backend is
    /// attached.
    pub fn require_imaging(&self, directive: &str) -> Result<&'a dyn ImagingBackend, DispatchError> {
        self.imaging
            .ok_or_else(|| DispatchError::imaging_unavailable(directive))
    }
}

impl Default for DispatchContext<'_> {
    fn default() -> Self {
        Self::new(&NO_VARIABLES)
    }
}

impl fmt::Debug for DispatchContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchContext")
            .field("variables", self.variables)
            .field("imaging", &self.imaging.is_some())
            .finish()
    }
}

/// Maps element names of one section to their handlers.
///
/// Lookup is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use mscript::{DirectiveRegistry, DispatchContext, DispatchError};
/// use mscript_core::ConfigNode;
///
/// fn count(_: &ConfigNode, total: &mut u32, _: &DispatchContext<'_>) -> Result<(), DispatchError> {
///     *total += 1;
///     Ok(())
/// }
///
/// let registry =
///     DirectiveRegistry::<u32>::try_new("counter", &[("tick", count)]).expect("unique names");
/// let mut total = 0;
/// let node = ConfigNode::builder("tick").build().expect("node");
/// registry.dispatch(&node, &mut total, &DispatchContext::default()).expect("known directive");
/// assert_eq!(total, 1);
/// ```
pub struct DirectiveRegistry<T> {
    section: &'static str,
    handlers: HashMap<&'static str, Handler<T>>,
}

impl<T> DirectiveRegistry<T> {
    /// Builds a registry from a table of `(name, handler)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDirective`] when a name appears more
    /// than once.
    pub fn try_new(
        section: &'static str,
        table: &[(&'static str, Handler<T>)],
    ) -> Result<Self, RegistryError> {
        let mut handlers = HashMap::with_capacity(table.len());
        for &(name, handler) in table {
            if handlers.insert(name, handler).is_some() {
                return Err(RegistryError::DuplicateDirective { section, name });
            }
        }
        Ok(Self { section, handlers })
    }

    /// Builds a registry from a static table whose names are known to be
    /// unique. Later entries win if they are not.
    pub(crate) fn from_table(section: &'static str, table: &[(&'static str, Handler<T>)]) -> Self {
        let handlers: HashMap<_, _> = table.iter().copied().collect();
        debug_assert_eq!(handlers.len(), table.len(), "duplicate directive in '{section}'");
        Self { section, handlers }
    }

    /// Returns the section name used in error messages.
    #[must_use]
    pub const fn section(&self) -> &'static str {
        self.section
    }

    /// Returns `true` when a handler is registered for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the registered names in lexical order.
    #[must_use]
    pub fn directive_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no directives are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Applies one directive element to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownDirective`] when no handler matches
    /// the element name, or whatever the handler reports.
    pub fn dispatch(
        &self,
        node: &ConfigNode,
        target: &mut T,
        context: &DispatchContext<'_>,
    ) -> Result<(), DispatchError> {
        let handler = self
            .handlers
            .get(node.name())
            .ok_or_else(|| DispatchError::unknown_directive(self.section, node.name()))?;
        handler(node, target, context)
    }

    /// Applies every child of `parent` in document order.
    ///
    /// Stops at the first failure; children applied before it stay applied.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::dispatch`].
    pub fn dispatch_children(
        &self,
        parent: &ConfigNode,
        target: &mut T,
        context: &DispatchContext<'_>,
    ) -> Result<(), DispatchError> {
        parent
            .children()
            .iter()
            .try_for_each(|child| self.dispatch(child, target, context))
    }
}

impl<T> fmt::Debug for DirectiveRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveRegistry")
            .field("section", &self.section)
            .field("directives", &self.directive_names())
            .finish()
    }
}
