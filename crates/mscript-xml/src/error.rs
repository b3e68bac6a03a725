//! Error type for XML parsing.

use mscript_core::NodeError;
use thiserror::Error;

/// Errors raised while turning XML text into a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The text is not well-formed XML.
    #[error("malformed XML at byte {position}: {message}")]
    Syntax {
        /// Byte offset reported by the reader.
        position: u64,
        /// Reader diagnostic.
        message: String,
    },
    /// An element could not be turned into a node.
    #[error("invalid element: {0}")]
    Node(#[from] NodeError),
    /// The document has no root element.
    #[error("document has no root element")]
    NoRoot,
    /// Content follows the root element.
    #[error("unexpected content after root element '{root}'")]
    TrailingContent {
        /// Name of the completed root element.
        root: String,
    },
    /// The document ended inside an element.
    #[error("element '{element}' is never closed")]
    Unclosed {
        /// Name of the innermost open element.
        element: String,
    },
}

impl XmlError {
    /// Creates a syntax error.
    pub fn syntax(position: u64, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }
}
