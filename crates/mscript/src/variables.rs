//! Script variables substituted into attribute values.
//!
//! An attribute whose whole value is `{$name}` is replaced by the value of
//! the variable `name` before it is parsed. Partial references such as
//! `prefix{$name}` are left untouched.

use std::collections::BTreeMap;

/// Caller-supplied variable table.
///
/// # Example
///
/// ```
/// use mscript::Variables;
///
/// let mut variables = Variables::new();
/// variables.insert("background", "red");
/// assert_eq!(variables.get("background"), Some("red"));
/// assert_eq!(Variables::reference("{$background}"), Some("background"));
/// assert_eq!(Variables::reference("red"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets a variable, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the variable name when `raw` is exactly `{$name}`.
    #[must_use]
    pub fn reference(raw: &str) -> Option<&str> {
        raw.strip_prefix("{$")
            .and_then(|rest| rest.strip_suffix('}'))
            .filter(|name| !name.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        variables.extend(iter);
        variables
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Variables {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
