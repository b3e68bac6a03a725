//! XML front end for Magick Script documents.
//!
//! [`parse_document`] turns script text into a [`ConfigNode`] tree: element
//! names become node names, attributes keep their document order, and
//! character data is collected as trimmed node text. Comments, declarations,
//! processing instructions and doctypes are skipped.
//!
//! ```
//! let root = mscript_xml::parse_document(
//!     r#"<msl><read><readSettings><width value="64"/></readSettings></read></msl>"#,
//! )
//! .expect("valid script");
//! assert_eq!(root.name(), "msl");
//! assert_eq!(root.descendants().count(), 4);
//! ```

mod error;
mod parser;

pub use error::XmlError;
pub use parser::parse_document;

/// Re-exported so callers need not depend on `mscript-core` directly.
pub use mscript_core::ConfigNode;

#[cfg(test)]
mod tests;
