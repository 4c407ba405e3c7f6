//! Preview pipeline configuration.
//!
//! Options deserialize from TOML with serde defaults, so an embedder's
//! config file only needs the keys it changes.

use std::path::Path;

use serde::Deserialize;

/// Options controlling the preview pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Render single newlines inside a paragraph as line breaks.
    ///
    /// On by default: the previewer mirrors what the author types, line
    /// for line, instead of requiring a blank line to separate text.
    pub hard_breaks: bool,
    /// Enable GFM extensions (tables, strikethrough, task lists).
    pub gfm: bool,
    /// Report the first H1 as the document title.
    pub extract_title: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            gfm: true,
            extract_title: true,
        }
    }
}

/// Error returned when preview options cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// I/O error reading the options file.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Options file is not valid TOML.
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
}

impl PreviewOptions {
    /// Parse options from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(input)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
