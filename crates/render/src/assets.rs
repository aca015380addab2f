//! Embedded assets for rendering.
//!
//! HTML templates are embedded into the binary at compile time using
//! [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[folder = "../../assets/templates/"]
pub struct Templates;
impl Templates {
    /// Get the source of a builtin template by name.
    pub fn load(name: impl AsRef<str>) -> Result<String> {
        let data = Self::get(name.as_ref())
            .map(|f| f.data)
            .ok_or_raise(|| ErrorKind::AssetNotFound(Self::identifier(&name)))?;
        String::from_utf8(data.into_owned()).or_raise(|| ErrorKind::AssetNotFound(Self::identifier(&name)))
    }

    /// List all available builtin template names.
    pub fn list() -> Vec<Cow<'static, str>> {
        Self::iter().filter(|f| f.ends_with(".html")).collect()
    }

    pub(crate) fn identifier(name: impl AsRef<str>) -> String {
        format!("builtin:{}", name.as_ref().trim().trim_start_matches("builtin:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_load_document_template() {
        let html = Templates::load("document.html");
        assert!(html.is_ok());
        assert!(!html.unwrap().is_empty());
    }

    #[test]
    fn list_includes_preview() {
        let templates = Templates::list();
        assert!(templates.iter().any(|t| t == "preview.html"));
    }

    #[test]
    fn missing_template() {
        let err = Templates::load("missing.html").unwrap_err();
        assert_eq!(*err, ErrorKind::AssetNotFound("builtin:missing.html".into()));
    }
}
