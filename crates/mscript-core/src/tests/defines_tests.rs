//! Tests for define keys, bundles and the settings define map.

use crate::{DefineKey, MagickFormat, ReadDefines, ReadSettings};

#[test]
fn define_key_displays_format_prefix() {
    let key = DefineKey::new(MagickFormat::Png, "bit-depth");
    assert_eq!(key.to_string(), "png:bit-depth");
    assert_eq!(key.format(), MagickFormat::Png);
    assert_eq!(key.name(), "bit-depth");
}

#[test]
fn read_defines_replace_existing_entries() {
    let mut defines = ReadDefines::new(MagickFormat::Jpeg);
    defines.insert("size", "64x64");
    defines.insert("size", "128x128");
    assert_eq!(defines.len(), 1);
    assert_eq!(defines.get("size"), Some("128x128"));
}

#[test]
fn set_defines_merges_into_define_map() {
    let mut defines = ReadDefines::new(MagickFormat::Png);
    defines.insert("bit-depth", "16");
    defines.insert_flag("preserve-colormap", true);

    let mut settings = ReadSettings::default();
    settings.set_define(MagickFormat::Png, "bit-depth", "8");
    settings.set_define(MagickFormat::Jpeg, "size", "10x10");
    settings.set_defines(&defines);

    assert_eq!(settings.define(MagickFormat::Png, "bit-depth"), Some("16"));
    assert_eq!(
        settings.define(MagickFormat::Png, "preserve-colormap"),
        Some("true")
    );
    assert_eq!(settings.define(MagickFormat::Jpeg, "size"), Some("10x10"));
    assert_eq!(settings.defines_map().len(), 3);
}

#[test]
fn remove_define_only_touches_matching_format() {
    let mut settings = ReadSettings::default();
    settings.set_define(MagickFormat::Png, "quality", "90");
    settings.set_define(MagickFormat::Jpeg, "quality", "80");

    let removed = settings.remove_define(MagickFormat::Png, "quality");

    assert_eq!(removed.as_deref(), Some("90"));
    assert_eq!(settings.define(MagickFormat::Png, "quality"), None);
    assert_eq!(settings.define(MagickFormat::Jpeg, "quality"), Some("80"));
}

#[test]
fn define_map_serialises_with_qualified_keys() {
    let mut settings = ReadSettings::default();
    settings.set_define_flag(MagickFormat::Tiff, "ignore-tags", false);
    let json = serde_json::to_value(&settings).expect("serialise");
    assert_eq!(json["setDefines"]["tiff:ignore-tags"], "false");
}
