//! Event-driven conversion of XML text into [`ConfigNode`] trees.

use std::borrow::Cow;

use mscript_core::{ConfigNode, ConfigNodeBuilder};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::XmlError;

/// An element whose end tag has not been read yet.
struct OpenElement {
    builder: ConfigNodeBuilder,
    text: String,
}

impl OpenElement {
    fn close(self) -> Result<ConfigNode, XmlError> {
        let Self { mut builder, text } = self;
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            builder.set_text(trimmed);
        }
        Ok(builder.build()?)
    }
}

/// Parses a complete document and returns its root element.
///
/// # Errors
///
/// Returns [`XmlError::Syntax`] for malformed markup, [`XmlError::Node`] for
/// empty names or duplicated attributes, [`XmlError::NoRoot`] for a document
/// without elements, [`XmlError::TrailingContent`] when anything but
/// whitespace or markup declarations follows the root, and
/// [`XmlError::Unclosed`] when the text ends inside an element.
pub fn parse_document(xml: &str) -> Result<ConfigNode, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<ConfigNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|error| XmlError::syntax(reader.error_position(), error.to_string()))?;
        match event {
            Event::Start(start) => {
                reject_after_root(root.as_ref())?;
                stack.push(open_element(&reader, &start)?);
            }
            Event::Empty(start) => {
                reject_after_root(root.as_ref())?;
                let element = open_element(&reader, &start)?;
                attach(element.close()?, &mut stack, &mut root);
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::syntax(reader.buffer_position(), "end tag without start tag")
                })?;
                let end_name = end.name();
                let name = reader
                    .decoder()
                    .decode(end_name.as_ref())
                    .map_err(|error| XmlError::syntax(reader.buffer_position(), error.to_string()))?;
                if name != element.builder.name() {
                    return Err(XmlError::syntax(
                        reader.buffer_position(),
                        format!(
                            "expected </{}>, found </{name}>",
                            element.builder.name()
                        ),
                    ));
                }
                attach(element.close()?, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let decoded = text
                    .decode()
                    .map_err(|error| XmlError::syntax(reader.buffer_position(), error.to_string()))?;
                append_text(&reader, &mut stack, root.as_ref(), &decoded)?;
            }
            Event::CData(data) => {
                let decoded = data
                    .decode()
                    .map_err(|error| XmlError::syntax(reader.buffer_position(), error.to_string()))?;
                append_text(&reader, &mut stack, root.as_ref(), &decoded)?;
            }
            Event::GeneralRef(reference) => {
                let resolved = resolve_reference(&reader, &reference)?;
                append_text(&reader, &mut stack, root.as_ref(), &resolved)?;
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unclosed {
            element: open.builder.name().to_owned(),
        });
    }
    root.ok_or(XmlError::NoRoot)
}

fn reject_after_root(root: Option<&ConfigNode>) -> Result<(), XmlError> {
    match root {
        Some(node) => Err(XmlError::TrailingContent {
            root: node.name().to_owned(),
        }),
        None => Ok(()),
    }
}

fn open_element(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<OpenElement, XmlError> {
    let decoder = reader.decoder();
    let syntax = |message: String| XmlError::syntax(reader.buffer_position(), message);

    let start_name = start.name();
    let name = decoder
        .decode(start_name.as_ref())
        .map_err(|error| syntax(error.to_string()))?;
    let mut builder = ConfigNode::builder(name.as_ref());

    // Duplicates are reported by the node builder.
    let mut attributes = start.attributes();
    attributes.with_checks(false);
    for parsed in attributes {
        let attribute = parsed.map_err(|error| syntax(error.to_string()))?;
        let key = decoder
            .decode(attribute.key.as_ref())
            .map_err(|error| syntax(error.to_string()))?;
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(|error| syntax(error.to_string()))?;
        builder.push_attribute(key.as_ref(), value.as_ref());
    }

    Ok(OpenElement {
        builder,
        text: String::new(),
    })
}

fn attach(node: ConfigNode, stack: &mut [OpenElement], root: &mut Option<ConfigNode>) {
    match stack.last_mut() {
        Some(parent) => parent.builder.push_child(node),
        None => *root = Some(node),
    }
}

fn append_text(
    reader: &Reader<&[u8]>,
    stack: &mut [OpenElement],
    root: Option<&ConfigNode>,
    text: &str,
) -> Result<(), XmlError> {
    if let Some(open) = stack.last_mut() {
        open.text.push_str(text);
        return Ok(());
    }
    if text.trim().is_empty() {
        return Ok(());
    }
    reject_after_root(root)?;
    Err(XmlError::syntax(
        reader.buffer_position(),
        "text outside the root element",
    ))
}

fn resolve_reference(
    reader: &Reader<&[u8]>,
    reference: &BytesRef<'_>,
) -> Result<Cow<'static, str>, XmlError> {
    let syntax = |message: String| XmlError::syntax(reader.buffer_position(), message);

    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|error| syntax(error.to_string()))?
    {
        return Ok(Cow::Owned(ch.to_string()));
    }
    let name = reference
        .decode()
        .map_err(|error| syntax(error.to_string()))?;
    resolve_predefined_entity(&name)
        .map(Cow::Borrowed)
        .ok_or_else(|| syntax(format!("unknown entity '&{name};'")))
}
