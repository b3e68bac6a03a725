//! Error types for directive dispatch.
//!
//! Every failure is terminal for the dispatch call that raised it and carries
//! the directive name so callers can report which element was rejected.

use mscript_core::ImagingError;
use thiserror::Error;

/// Errors surfaced while dispatching directives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No handler is registered for the element name.
    #[error("unknown directive '{name}' in '{section}'")]
    UnknownDirective {
        /// Section whose registry was consulted.
        section: String,
        /// The exact element name.
        name: String,
    },

    /// The present attributes match none of the accepted shapes.
    #[error("invalid argument combination for '{directive}', allowed combinations are: {accepted}")]
    InvalidArgumentCombination {
        /// Directive name.
        directive: String,
        /// Accepted shapes, for example `[format, name, flag] [format, name, value]`.
        accepted: String,
    },

    /// An attribute value could not be converted to the expected type.
    #[error(
        "attribute '{key}' of '{directive}' is not a valid {expected_type}: '{raw_value}' ({reason})"
    )]
    AttributeParse {
        /// Directive name.
        directive: String,
        /// Attribute key.
        key: String,
        /// Text after variable substitution.
        raw_value: String,
        /// Name of the expected type.
        expected_type: &'static str,
        /// Parser diagnostic.
        reason: String,
    },

    /// A required attribute is absent.
    #[error("directive '{directive}' requires attribute '{key}'")]
    MissingAttribute {
        /// Directive name.
        directive: String,
        /// Attribute key.
        key: String,
    },

    /// A required child element is absent.
    #[error("directive '{directive}' requires a '{child}' element")]
    MissingChild {
        /// Directive name.
        directive: String,
        /// Expected child name.
        child: String,
    },

    /// An attribute references a variable that was never supplied.
    #[error("attribute '{key}' of '{directive}' references undefined variable '{variable}'")]
    UndefinedVariable {
        /// Directive name.
        directive: String,
        /// Attribute key.
        key: String,
        /// Variable name without the `{$` `}` delimiters.
        variable: String,
    },

    /// The directive needs an imaging backend and none was supplied.
    #[error("directive '{directive}' requires an imaging backend")]
    ImagingUnavailable {
        /// Directive name.
        directive: String,
    },

    /// The imaging backend rejected the request.
    #[error("imaging failed for '{directive}': {source}")]
    Imaging {
        /// Directive name.
        directive: String,
        /// Backend error.
        #[source]
        source: ImagingError,
    },
}

impl DispatchError {
    /// Creates an unknown directive error.
    pub fn unknown_directive(section: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownDirective {
            section: section.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid argument combination error listing the accepted
    /// attribute shapes.
    pub fn invalid_argument_combination(
        directive: impl Into<String>,
        shapes: &[&[&str]],
    ) -> Self {
        let accepted = shapes
            .iter()
            .map(|shape| format!("[{}]", shape.join(", ")))
            .collect::<Vec<_>>()
            .join(" ");
        Self::InvalidArgumentCombination {
            directive: directive.into(),
            accepted,
        }
    }

    /// Creates an attribute parse error.
    pub fn attribute_parse(
        directive: impl Into<String>,
        key: impl Into<String>,
        raw_value: impl Into<String>,
        expected_type: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::AttributeParse {
            directive: directive.into(),
            key: key.into(),
            raw_value: raw_value.into(),
            expected_type,
            reason: reason.into(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attribute(directive: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingAttribute {
            directive: directive.into(),
            key: key.into(),
        }
    }

    /// Creates a missing child error.
    pub fn missing_child(directive: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingChild {
            directive: directive.into(),
            child: child.into(),
        }
    }

    /// Creates an undefined variable error.
    pub fn undefined_variable(
        directive: impl Into<String>,
        key: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        Self::UndefinedVariable {
            directive: directive.into(),
            key: key.into(),
            variable: variable.into(),
        }
    }

    /// Creates an imaging unavailable error.
    pub fn imaging_unavailable(directive: impl Into<String>) -> Self {
        Self::ImagingUnavailable {
            directive: directive.into(),
        }
    }

    /// Wraps a backend failure.
    pub fn imaging(directive: impl Into<String>, source: ImagingError) -> Self {
        Self::Imaging {
            directive: directive.into(),
            source,
        }
    }

    /// Returns the directive or element name the error refers to.
    #[must_use]
    pub fn directive(&self) -> &str {
        match self {
            Self::UnknownDirective { name, .. } => name,
            Self::InvalidArgumentCombination { directive, .. }
            | Self::AttributeParse { directive, .. }
            | Self::MissingAttribute { directive, .. }
            | Self::MissingChild { directive, .. }
            | Self::UndefinedVariable { directive, .. }
            | Self::ImagingUnavailable { directive }
            | Self::Imaging { directive, .. } => directive,
        }
    }
}

/// Errors raised while building a directive registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two handlers were registered under the same name.
    #[error("directive '{name}' is registered twice in '{section}'")]
    DuplicateDirective {
        /// Section of the registry.
        section: &'static str,
        /// The duplicated name.
        name: &'static str,
    },
}
