//! Language table construction and lookup.
//!
//! Consumes the parsed sheet from [`crate::reader`], discovers the set
//! of language columns, and maintains a key→value mapping for the
//! currently selected language. Switching languages rebuilds the
//! mapping from the retained rows; the sheet text is never re-read for
//! a switch. A failed build or switch leaves the previously active
//! state untouched.

use crate::config::LocalizationConfig;
use crate::error::{LocalizationError, Result};
use crate::reader::{CsvTable, RowRecord};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Event delivered to subscribers after every successful rebuild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChange {
    /// The language the table is now serving
    pub language: String,
}

type Subscriber = Box<dyn Fn(&LanguageChange) + Send>;

/// Key→value translations for one selected language, with the parsed
/// rows retained so the selection can change without re-parsing
pub struct LanguageTable {
    key_header: String,
    rows: Vec<RowRecord>,
    supported_languages: Vec<String>,
    default_language: Option<String>,
    current_language: Option<String>,
    entries: HashMap<String, String>,
    subscribers: Vec<Subscriber>,
}

impl LanguageTable {
    /// Build a table from a parsed sheet.
    ///
    /// The first language column discovered becomes the default
    /// language for the lifetime of the table. A configured startup
    /// language wins only when the sheet actually contains it;
    /// otherwise the default is selected and a warning is logged.
    ///
    /// A sheet with a header row but no data rows is a valid table with
    /// zero entries. A sheet with no header row at all is rejected.
    pub fn build(sheet: &CsvTable, config: &LocalizationConfig) -> Result<Self> {
        if sheet.is_empty() {
            return Err(LocalizationError::malformed_input(
                "sheet has no header row",
            ));
        }

        let supported_languages = discover_languages(&sheet.headers, &config.key_header);
        let default_language = supported_languages.first().cloned();

        let current_language = match &config.startup_language {
            Some(requested) if supported_languages.contains(requested) => {
                Some(requested.clone())
            }
            Some(requested) => {
                warn!(
                    "startup language '{}' is not in the sheet, falling back to '{}'",
                    requested,
                    default_language.as_deref().unwrap_or("<none>")
                );
                default_language.clone()
            }
            None => default_language.clone(),
        };

        let entries = match &current_language {
            Some(language) => build_entries(&sheet.rows, &config.key_header, language)?,
            None => HashMap::new(),
        };

        debug!(
            "built language table: {} languages, {} entries, current '{}'",
            supported_languages.len(),
            entries.len(),
            current_language.as_deref().unwrap_or("<none>")
        );

        Ok(Self {
            key_header: config.key_header.clone(),
            rows: sheet.rows.clone(),
            supported_languages,
            default_language,
            current_language,
            entries,
            subscribers: Vec::new(),
        })
    }

    /// Switch the active language.
    ///
    /// A no-op when the language is already selected. Fails with
    /// `UnsupportedLanguage` when the sheet has no such column, leaving
    /// the current selection and entries exactly as they were. On
    /// success the entries are rebuilt from the retained rows and
    /// subscribers are notified.
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        if self.current_language.as_deref() == Some(language) {
            return Ok(());
        }
        if !self.supported_languages.iter().any(|l| l == language) {
            return Err(LocalizationError::unsupported_language(
                language,
                &self.supported_languages,
            ));
        }

        let entries = build_entries(&self.rows, &self.key_header, language)?;
        self.entries = entries;
        self.current_language = Some(language.to_string());
        self.notify();
        Ok(())
    }

    /// Switch back to the language discovered first in the sheet
    pub fn reset_to_default_language(&mut self) -> Result<()> {
        match self.default_language.clone() {
            Some(language) => self.set_language(&language),
            None => Ok(()),
        }
    }

    /// Replace the table contents from a freshly parsed sheet.
    ///
    /// This is the full-reload path for when the source text itself has
    /// changed. Supported languages are re-discovered; the default
    /// language is fixed at first build and survives the reload. The
    /// current selection is kept when the new sheet still carries it,
    /// otherwise the selection falls back to the default (or the first
    /// newly discovered language). On error the table is untouched.
    pub fn refresh(&mut self, sheet: &CsvTable) -> Result<()> {
        if sheet.is_empty() {
            return Err(LocalizationError::malformed_input(
                "sheet has no header row",
            ));
        }

        let supported_languages = discover_languages(&sheet.headers, &self.key_header);

        let keep = |candidate: &Option<String>| {
            candidate
                .as_ref()
                .filter(|l| supported_languages.contains(l))
                .cloned()
        };
        let current_language = keep(&self.current_language)
            .or_else(|| keep(&self.default_language))
            .or_else(|| supported_languages.first().cloned());

        let entries = match &current_language {
            Some(language) => build_entries(&sheet.rows, &self.key_header, language)?,
            None => HashMap::new(),
        };

        self.rows = sheet.rows.clone();
        self.supported_languages = supported_languages;
        if self.default_language.is_none() {
            self.default_language = current_language.clone();
        }
        self.current_language = current_language;
        self.entries = entries;
        self.notify();
        Ok(())
    }

    /// Look up the translation for a key in the current language
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LocalizationError::key_not_found(key))
    }

    /// Whether the current language has a translation for the key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys with a translation in the current language
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of translations in the current language
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Languages identified in the most recent parse, in header order
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// The first language discovered; fixed for the table's lifetime
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// The language currently being served
    pub fn current_language(&self) -> Option<&str> {
        self.current_language.as_deref()
    }

    /// Header name of the key column this table was built with
    pub fn key_header(&self) -> &str {
        &self.key_header
    }

    /// Register a handler invoked after every successful rebuild, so
    /// display elements can refresh their shown text
    pub fn subscribe(&mut self, handler: impl Fn(&LanguageChange) + Send + 'static) {
        self.subscribers.push(Box::new(handler));
    }

    fn notify(&self) {
        let Some(language) = &self.current_language else {
            return;
        };
        let change = LanguageChange {
            language: language.clone(),
        };
        for handler in &self.subscribers {
            handler(&change);
        }
    }
}

impl fmt::Debug for LanguageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageTable")
            .field("key_header", &self.key_header)
            .field("supported_languages", &self.supported_languages)
            .field("default_language", &self.default_language)
            .field("current_language", &self.current_language)
            .field("entries", &self.entries.len())
            .field("rows", &self.rows.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Every header except the key column is a language, in first-seen
/// order, deduplicated
fn discover_languages(headers: &[String], key_header: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for header in headers {
        if header != key_header && !languages.contains(header) {
            languages.push(header.clone());
        }
    }
    languages
}

/// Build the key→value mapping for one language. Later rows overwrite
/// earlier rows sharing a key. A row without the key column or without
/// the language column aborts the build; callers keep their previous
/// mapping in that case.
fn build_entries(
    rows: &[RowRecord],
    key_header: &str,
    language: &str,
) -> Result<HashMap<String, String>> {
    let mut entries = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let key = row
            .get(key_header)
            .ok_or_else(|| LocalizationError::missing_column(index, key_header))?;
        let value = row
            .get(language)
            .ok_or_else(|| LocalizationError::missing_column(index, language))?;
        entries.insert(key.to_string(), value.to_string());
    }
    Ok(entries)
}
