//! Parsed document nodes consumed by directive dispatch.
//!
//! A [`ConfigNode`] is the unit of a Magick Script document: a non-empty
//! element name, an ordered set of uniquely keyed string attributes, ordered
//! child nodes and optional text. Nodes are immutable once built; use
//! [`ConfigNode::builder`] to construct one.

use thiserror::Error;

/// A single `name="value"` attribute on a [`ConfigNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw attribute text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Errors raised while building a [`ConfigNode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The node name was empty.
    #[error("node name must not be empty")]
    EmptyName,
    /// The same attribute key appeared twice on one node.
    #[error("duplicate attribute '{attribute}' on node '{node}'")]
    DuplicateAttribute {
        /// Name of the offending node.
        node: String,
        /// The repeated attribute key.
        attribute: String,
    },
}

/// A named document node with attributes, children and optional text.
///
/// # Example
///
/// ```
/// use mscript_core::ConfigNode;
///
/// let node = ConfigNode::builder("backgroundColor")
///     .attribute("value", "red")
///     .build()
///     .expect("valid node");
/// assert_eq!(node.name(), "backgroundColor");
/// assert_eq!(node.attribute("value"), Some("red"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<ConfigNode>,
    text: Option<String>,
}

impl ConfigNode {
    /// Starts building a node with the given element name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ConfigNodeBuilder {
        ConfigNodeBuilder {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute value by exact key.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(Attribute::value)
    }

    /// Returns `true` when the node carries the attribute.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns the attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the trimmed text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Visits this node and all descendants depth-first, in document order.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Incremental builder for [`ConfigNode`].
#[derive(Debug, Clone)]
pub struct ConfigNodeBuilder {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<ConfigNode>,
    text: Option<String>,
}

impl ConfigNodeBuilder {
    /// Appends an attribute. Duplicates are reported by [`Self::build`].
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Appends an attribute in place.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: ConfigNode) -> Self {
        self.push_child(child);
        self
    }

    /// Appends a child node in place.
    pub fn push_child(&mut self, child: ConfigNode) {
        self.children.push(child);
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Sets the text content in place.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Returns the name the node will be built with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates and builds the node.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::EmptyName`] for an empty name and
    /// [`NodeError::DuplicateAttribute`] when an attribute key repeats.
    pub fn build(self) -> Result<ConfigNode, NodeError> {
        if self.name.is_empty() {
            return Err(NodeError::EmptyName);
        }
        for (index, attribute) in self.attributes.iter().enumerate() {
            let repeated = self
                .attributes
                .iter()
                .skip(index + 1)
                .any(|other| other.name == attribute.name);
            if repeated {
                return Err(NodeError::DuplicateAttribute {
                    node: self.name.clone(),
                    attribute: attribute.name.clone(),
                });
            }
        }
        Ok(ConfigNode {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
            text: self.text,
        })
    }
}
