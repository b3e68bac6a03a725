//! Tests for [`ConfigNode`] construction and navigation.

use crate::{ConfigNode, NodeError};

fn leaf(name: &str) -> ConfigNode {
    ConfigNode::builder(name).build().expect("leaf node")
}

#[test]
fn builder_preserves_attribute_order() {
    let node = ConfigNode::builder("setDefine")
        .attribute("format", "png")
        .attribute("name", "bit-depth")
        .attribute("value", "8")
        .build()
        .expect("node");
    let names: Vec<&str> = node.attributes().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["format", "name", "value"]);
    assert_eq!(node.attribute("name"), Some("bit-depth"));
    assert!(node.has_attribute("value"));
    assert!(!node.has_attribute("flag"));
}

#[test]
fn builder_rejects_empty_name() {
    let error = ConfigNode::builder("").build().expect_err("empty name");
    assert_eq!(error, NodeError::EmptyName);
}

#[test]
fn builder_rejects_duplicate_attributes() {
    let error = ConfigNode::builder("width")
        .attribute("value", "1")
        .attribute("value", "2")
        .build()
        .expect_err("duplicate attribute");
    assert_eq!(
        error,
        NodeError::DuplicateAttribute {
            node: String::from("width"),
            attribute: String::from("value"),
        }
    );
}

#[test]
fn attribute_lookup_is_case_sensitive() {
    let node = ConfigNode::builder("width")
        .attribute("value", "1")
        .build()
        .expect("node");
    assert_eq!(node.attribute("Value"), None);
}

#[test]
fn child_returns_first_match() {
    let first = ConfigNode::builder("defines")
        .attribute("format", "png")
        .build()
        .expect("first");
    let second = ConfigNode::builder("defines")
        .attribute("format", "jpeg")
        .build()
        .expect("second");
    let parent = ConfigNode::builder("setDefines")
        .child(first.clone())
        .child(second)
        .build()
        .expect("parent");
    assert_eq!(parent.child("defines"), Some(&first));
    assert_eq!(parent.child("missing"), None);
}

#[test]
fn descendants_walk_depth_first_in_document_order() {
    let tree = ConfigNode::builder("msl")
        .child(
            ConfigNode::builder("read")
                .child(leaf("readSettings"))
                .build()
                .expect("read"),
        )
        .child(leaf("write"))
        .build()
        .expect("tree");
    let names: Vec<&str> = tree.descendants().map(ConfigNode::name).collect();
    assert_eq!(names, ["msl", "read", "readSettings", "write"]);
}
