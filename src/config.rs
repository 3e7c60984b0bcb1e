//! Configuration for localization table construction.
//!
//! Controls which header column holds the language-independent keys and
//! which language, if any, should be selected at startup instead of the
//! first language discovered in the sheet.

use crate::constants::DEFAULT_KEY_HEADER;
use serde::{Deserialize, Serialize};

/// Settings applied when parsing a sheet and building its language table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Header column containing the language-independent keys
    pub key_header: String,

    /// Language to select on load. When `None`, or when the named
    /// language is not present in the sheet, the first discovered
    /// language is used instead.
    pub startup_language: Option<String>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            key_header: DEFAULT_KEY_HEADER.to_string(),
            startup_language: None,
        }
    }
}

impl LocalizationConfig {
    /// Create configuration with a custom key-column header
    pub fn with_key_header(mut self, key_header: impl Into<String>) -> Self {
        self.key_header = key_header.into();
        self
    }

    /// Create configuration with a startup language override
    pub fn with_startup_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.startup_language = if language.is_empty() {
            None
        } else {
            Some(language)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalizationConfig::default();
        assert_eq!(config.key_header, "Keys");
        assert!(config.startup_language.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = LocalizationConfig::default()
            .with_key_header("Id")
            .with_startup_language("French");
        assert_eq!(config.key_header, "Id");
        assert_eq!(config.startup_language.as_deref(), Some("French"));
    }

    #[test]
    fn test_empty_startup_language_is_none() {
        let config = LocalizationConfig::default().with_startup_language("");
        assert!(config.startup_language.is_none());
    }
}
