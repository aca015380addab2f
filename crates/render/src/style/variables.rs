//! CSS custom properties (variables) for rendered documents.
//!
//! [`CssVariables`] is rendered as a `<style>` block setting `:root` custom
//! properties. Themes are expressed entirely through these, so stylesheets
//! refer to `rgb(var(--color-dark))` rather than hard-coded colours.

use rslug::slugify;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An RGB triplet, rendered as `r, g, b` so it can be wrapped in `rgb(...)`
/// or `rgba(..., alpha)` by stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// A set of CSS custom properties injected as `:root` variables.
///
/// Each entry becomes `--{key}: {value};`. Keys are slugified on insertion,
/// so entries are emitted in slug order and keys sharing a slug collapse into
/// one entry (the last value wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    variables: BTreeMap<String, String>,
}
impl CssVariables {
    /// Creates a new set of CSS variables from any map-like type.
    pub fn new(map: impl Into<BTreeMap<String, String>>) -> Self {
        map.into().into_iter().collect()
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.variables.get(&slugify!(key.as_ref())).map(String::as_str)
    }

    /// Only the declarations, without the surrounding `<style>` block.
    pub fn declarations(&self) -> String {
        self.variables
            .iter()
            .map(|(key, value)| format!("--{key}: {};", value.replace([';', '{', '}', '<'], "")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for CssVariables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let variables = iter
            .into_iter()
            .map(|(k, v)| {
                let key: String = k.into();
                (slugify!(&key), v.to_string())
            })
            .collect();
        Self { variables }
    }
}
impl Display for CssVariables {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<style>\n:root {{ {} }}\n</style>", self.declarations())
    }
}
