//! Format-scoped define entries passed through to the imaging library.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::MagickFormat;

/// Key of a define: the format it applies to and the option name.
///
/// Displays as `format:name`, the form ImageMagick expects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefineKey {
    format: MagickFormat,
    name: String,
}

impl DefineKey {
    /// Builds a key.
    #[must_use]
    pub fn new(format: MagickFormat, name: impl Into<String>) -> Self {
        Self {
            format,
            name: name.into(),
        }
    }

    /// Returns the format.
    #[must_use]
    pub const fn format(&self) -> MagickFormat {
        self.format
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DefineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.format, self.name)
    }
}

impl Serialize for DefineKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Text stored for a boolean define.
#[must_use]
pub const fn flag_text(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

/// A bundle of defines for a single format.
///
/// # Example
///
/// ```
/// use mscript_core::{MagickFormat, ReadDefines};
///
/// let mut defines = ReadDefines::new(MagickFormat::Jpeg);
/// defines.insert("size", "128x128");
/// defines.insert_flag("fancy-upsampling", false);
/// assert_eq!(defines.get("fancy-upsampling"), Some("false"));
/// assert_eq!(defines.keys().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadDefines {
    format: MagickFormat,
    entries: BTreeMap<String, String>,
}

impl ReadDefines {
    /// Creates an empty bundle for the format.
    #[must_use]
    pub const fn new(format: MagickFormat) -> Self {
        Self {
            format,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the format every entry applies to.
    #[must_use]
    pub const fn format(&self) -> MagickFormat {
        self.format
    }

    /// Inserts or replaces a string entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Inserts or replaces a boolean entry.
    pub fn insert_flag(&mut self, name: impl Into<String>, flag: bool) {
        self.insert(name, flag_text(flag));
    }

    /// Looks up an entry by option name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bundle has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the fully qualified keys in name order.
    pub fn keys(&self) -> impl Iterator<Item = DefineKey> + '_ {
        self.entries
            .keys()
            .map(|name| DefineKey::new(self.format, name.as_str()))
    }

    /// Iterates `(key, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (DefineKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (DefineKey::new(self.format, name.as_str()), value.as_str()))
    }
}
