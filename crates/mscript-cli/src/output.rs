//! Rendering of evaluated read settings.

use std::io::Write;

use mscript_core::ReadSettings;
use serde_json::{Map, Value};

use crate::AppError;

/// Writes the settings as a pretty-printed JSON array.
pub(crate) fn render_json<W: Write>(out: &mut W, sections: &[ReadSettings]) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, sections).map_err(AppError::Serialise)?;
    writeln!(out)?;
    Ok(())
}

/// Writes one block per section listing the fields that differ from the
/// defaults.
pub(crate) fn render_human<W: Write>(
    out: &mut W,
    sections: &[ReadSettings],
) -> Result<(), AppError> {
    if sections.is_empty() {
        writeln!(out, "no readSettings sections")?;
        return Ok(());
    }

    let defaults = to_object(&ReadSettings::default())?;
    for (number, settings) in (1..).zip(sections) {
        writeln!(out, "readSettings #{number}")?;
        let changed = changed_fields(&defaults, &to_object(settings)?);
        if changed.is_empty() {
            writeln!(out, "  (defaults)")?;
        }
        for (key, value) in changed {
            writeln!(out, "  {key}: {value}")?;
        }
    }
    Ok(())
}

fn to_object(settings: &ReadSettings) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(settings).map_err(AppError::Serialise)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Returns `(key, rendered value)` pairs for every entry of `current` that
/// differs from `defaults`. Nested objects present in both are compared
/// entry by entry under a dotted key.
pub(crate) fn changed_fields(
    defaults: &Map<String, Value>,
    current: &Map<String, Value>,
) -> Vec<(String, String)> {
    let mut changed = Vec::new();
    collect_changes("", defaults, current, &mut changed);
    changed
}

fn collect_changes(
    prefix: &str,
    defaults: &Map<String, Value>,
    current: &Map<String, Value>,
    changed: &mut Vec<(String, String)>,
) {
    for (key, value) in current {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match (defaults.get(key), value) {
            (Some(default), _) if default == value => {}
            (Some(Value::Object(default)), Value::Object(nested)) => {
                collect_changes(&path, default, nested, changed);
            }
            _ => changed.push((path, render_value(value))),
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "unset".to_owned(),
        other => other.to_string(),
    }
}
