//! Reading block definitions and other documents from disk.
//!
//! Definitions are plain serde documents, so they are parsed with `serde_json`/`toml` directly
//! rather than through the layered settings loader, which would fold key case.

use crate::error::{ConfigError, ConfigErrorExt};
use bemkit_domain::BlockConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use strum_macros::{AsRefStr, Display, EnumString};
use tracing::debug;

/// Document encodings understood by the loaders, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the extension of `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

        extension.parse().map_err(|_| ConfigError::UnsupportedFormat {
            message: format!("expected a .json or .toml file, got '{extension}'").into(),
            context: Some(path.display().to_string().into()),
        })
    }

    /// Parses `content` as this format.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] or [`ConfigError::Toml`] if `content` is malformed or does
    /// not match `T`.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
        }
    }
}

/// Reads and deserializes a JSON or TOML document, choosing the format by extension.
///
/// # Errors
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions, [`ConfigError::Io`] if the
/// file cannot be read, and [`ConfigError::Json`]/[`ConfigError::Toml`] for malformed content.
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path).context(path.display().to_string())?;

    debug!(path = %path.display(), format = %format, bytes = content.len(), "Read document");

    format.parse::<T>(&content).context(path.display().to_string())
}

/// Reads a [`BlockConfig`] from a `.json` or `.toml` file.
///
/// # Errors
/// Same as [`load_document`].
pub fn load_definition(path: impl AsRef<Path>) -> Result<BlockConfig, ConfigError> {
    load_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.json")).unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("b.TOML")).unwrap(), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::Toml.as_ref(), "toml");
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = DocumentFormat::from_path(Path::new("button.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
        assert_eq!(
            err.to_string(),
            "Unsupported document format (button.yaml): expected a .json or .toml file, got 'yaml'"
        );

        assert!(DocumentFormat::from_path(Path::new("Makefile")).is_err());
    }
}
