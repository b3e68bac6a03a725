//! Script walking, failure semantics and order independence.

use mscript_core::{ColorSpace, ConfigNode, MagickColor, MagickFormat, ReadSettings};
use mscript_xml::XmlError;
use rstest::rstest;

use super::support::{directive, parent, value_directive};
use crate::{DispatchContext, DispatchError, Script, ScriptError, read_settings_registry};

const TWO_SECTIONS: &str = r#"
<msl>
  <read filename="a.png">
    <readSettings>
      <backgroundColor value="red"/>
      <setDefine format="png" name="bit-depth" value="8"/>
    </readSettings>
  </read>
  <group>
    <read filename="b.raw">
      <readSettings>
        <width value="16"/>
        <pixelStorage>
          <storageType value="Char"/>
        </pixelStorage>
      </readSettings>
    </read>
  </group>
</msl>"#;

#[test]
fn finds_sections_in_document_order() {
    let script = Script::parse(TWO_SECTIONS).expect("script");
    let sections: Vec<_> = script.read_settings_sections().collect();
    let [first_section, second_section] = sections.as_slice() else {
        panic!("expected two sections, got {}", sections.len());
    };

    let first = script.build_read_settings(first_section, None).expect("first");
    assert_eq!(first.background_color, Some(MagickColor::rgb(255, 0, 0)));
    assert_eq!(first.define(MagickFormat::Png, "bit-depth"), Some("8"));

    let second = script.build_read_settings(second_section, None).expect("second");
    assert_eq!(second.width, Some(16));
    assert!(second.pixel_storage.is_some());
    assert_eq!(second.background_color, None);
}

#[test]
fn apply_mutates_existing_settings() {
    let script = Script::parse(TWO_SECTIONS).expect("script");
    let section = script.read_settings_sections().nth(1).expect("section");

    let mut settings = ReadSettings::default();
    settings.color_space = ColorSpace::Cmyk;
    script
        .apply_read_settings(section, &mut settings, None)
        .expect("apply");

    assert_eq!(settings.color_space, ColorSpace::Cmyk);
    assert_eq!(settings.width, Some(16));
}

#[test]
fn failure_keeps_earlier_siblings_applied() {
    let section = parent(
        "readSettings",
        &[],
        vec![
            value_directive("width", "10"),
            value_directive("colorSpace", "nonsense"),
            value_directive("height", "20"),
        ],
    );
    let mut settings = ReadSettings::default();
    let error = read_settings_registry()
        .dispatch_children(&section, &mut settings, &DispatchContext::default())
        .expect_err("second child fails");

    assert!(matches!(error, DispatchError::AttributeParse { .. }));
    assert_eq!(settings.width, Some(10));
    assert_eq!(settings.height, None);
}

fn disjoint_directives() -> Vec<ConfigNode> {
    vec![
        value_directive("backgroundColor", "red"),
        value_directive("colorSpace", "sRGB"),
        value_directive("strokeWidth", "3"),
        value_directive("frameCount", "2"),
        value_directive("font", "Arial"),
        directive(
            "setDefine",
            &[("format", "png"), ("name", "bit-depth"), ("value", "8")],
        ),
    ]
}

fn dispatch_all(nodes: &[ConfigNode]) -> ReadSettings {
    let mut settings = ReadSettings::default();
    for node in nodes {
        read_settings_registry()
            .dispatch(node, &mut settings, &DispatchContext::default())
            .expect("dispatch");
    }
    settings
}

#[rstest]
#[case(&[5, 4, 3, 2, 1, 0])]
#[case(&[1, 3, 5, 0, 2, 4])]
#[case(&[2, 0, 4, 1, 5, 3])]
fn disjoint_directives_are_order_independent(#[case] order: &[usize]) {
    let nodes = disjoint_directives();
    let reordered: Vec<_> = order
        .iter()
        .map(|&index| nodes.get(index).cloned().expect("index in range"))
        .collect();
    assert_eq!(dispatch_all(&reordered), dispatch_all(&nodes));
}

#[test]
fn later_directive_wins_for_same_field() {
    let settings = dispatch_all(&[
        value_directive("width", "1"),
        value_directive("width", "2"),
    ]);
    assert_eq!(settings.width, Some(2));
}

#[test]
fn unknown_directive_surfaces_through_script() {
    let script = Script::parse(
        "<msl><read><readSettings><quality value=\"90\"/></readSettings></read></msl>",
    )
    .expect("script");
    let section = script.read_settings_sections().next().expect("section");
    let error = script
        .build_read_settings(section, None)
        .expect_err("unknown directive");
    assert_eq!(error, DispatchError::unknown_directive("readSettings", "quality"));
}

#[test]
fn malformed_script_fails_to_parse() {
    let error = Script::parse("<msl><read></msl>").expect_err("mismatched tags");
    assert!(matches!(error, ScriptError::Xml(XmlError::Syntax { .. })));
}

#[test]
fn script_without_sections_yields_nothing() {
    let script = Script::parse("<msl><write filename=\"out.png\"/></msl>").expect("script");
    assert_eq!(script.read_settings_sections().count(), 0);
    assert_eq!(script.root().name(), "msl");
}
