//! Editor settings
//!
//! Construction-time parameters of an editor, loadable from TOML, YAML, or
//! JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vocabulary::VocabularySource;

/// Construction-time editor parameters
///
/// # Example
/// ```
/// use tagset_engine::{EditorSettings, VocabularySource};
///
/// let settings = EditorSettings::from_toml_str(r#"
///     vocabulary = ["red", "green", "blue"]
///     read_only = true
/// "#).unwrap();
///
/// assert_eq!(settings.vocabulary, VocabularySource::custom(["red", "green", "blue"]));
/// assert!(settings.read_only);
/// assert!(!settings.hide_numbers);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Vocabulary to offer
    pub vocabulary: VocabularySource,

    /// Render the selection but accept no changes
    pub read_only: bool,

    /// Style the control as erroneous; no semantic effect
    pub error: bool,

    /// Hide numeric inputs on chips
    pub hide_numbers: bool,
}

impl EditorSettings {
    /// Default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With vocabulary
    #[inline]
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: impl Into<VocabularySource>) -> Self {
        self.vocabulary = vocabulary.into();
        self
    }

    /// With read-only flag
    #[inline]
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// With error flag
    #[inline]
    #[must_use]
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// With hide-numbers flag
    #[inline]
    #[must_use]
    pub fn with_hide_numbers(mut self, hide_numbers: bool) -> Self {
        self.hide_numbers = hide_numbers;
        self
    }

    /// Parse TOML
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse YAML
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parse JSON
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load from a file, picking the format by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, the extension is not
    /// recognized, or the contents do not parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let settings = match extension.as_str() {
            "toml" => Self::from_toml_str(&source),
            "yaml" | "yml" => Self::from_yaml_str(&source),
            "json" => Self::from_json_str(&source),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }?;
        tracing::debug!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }
}

impl From<VocabularySource> for EditorSettings {
    fn from(vocabulary: VocabularySource) -> Self {
        Self::new().with_vocabulary(vocabulary)
    }
}
