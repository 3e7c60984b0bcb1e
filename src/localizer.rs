//! The localization service owned by the host application.
//!
//! Ties a [`TextSource`], a [`LocalizationConfig`], and the active
//! [`LanguageTable`] together: load a sheet once at startup, look up
//! translations, switch languages without touching the source, and
//! re-read the source only when its text has actually changed.
//!
//! This is an explicitly constructed, owned object; the host decides
//! where it lives and who may mutate it.

use crate::config::LocalizationConfig;
use crate::error::Result;
use crate::reader;
use crate::source::TextSource;
use crate::table::{LanguageChange, LanguageTable};
use tracing::debug;

#[derive(Debug)]
pub struct Localizer<S: TextSource> {
    config: LocalizationConfig,
    source: S,
    sheet_id: String,
    table: LanguageTable,
}

impl<S: TextSource> Localizer<S> {
    /// Load a sheet from the source and build its language table
    pub fn load(source: S, config: LocalizationConfig, sheet_id: &str) -> Result<Self> {
        let text = source.load(sheet_id)?;
        let table = LanguageTable::build(&reader::read(&text), &config)?;
        debug!("loaded sheet '{}'", sheet_id);
        Ok(Self {
            config,
            source,
            sheet_id: sheet_id.to_string(),
            table,
        })
    }

    /// Re-read the current sheet from the source.
    ///
    /// Only needed when the source text itself may have changed; a
    /// language switch never requires it. The previous table stays
    /// authoritative when the reload fails.
    pub fn reload(&mut self) -> Result<()> {
        let text = self.source.load(&self.sheet_id)?;
        self.table.refresh(&reader::read(&text))
    }

    /// Swap to a different sheet from the same source. Subscriptions
    /// and the default language carry over; on failure the previously
    /// loaded sheet remains active.
    pub fn switch_sheet(&mut self, sheet_id: &str) -> Result<()> {
        let text = self.source.load(sheet_id)?;
        self.table.refresh(&reader::read(&text))?;
        self.sheet_id = sheet_id.to_string();
        Ok(())
    }

    /// Switch the active language; see [`LanguageTable::set_language`]
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.table.set_language(language)
    }

    /// Switch back to the first language the sheet declared
    pub fn reset_to_default_language(&mut self) -> Result<()> {
        self.table.reset_to_default_language()
    }

    /// Translation for a key in the current language
    pub fn get(&self, key: &str) -> Result<&str> {
        self.table.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Register a handler run after every successful rebuild
    pub fn subscribe(&mut self, handler: impl Fn(&LanguageChange) + Send + 'static) {
        self.table.subscribe(handler);
    }

    /// Identifier of the currently loaded sheet
    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    /// The active language table, for read-only inspection
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocalizationError;
    use crate::source::FileSource;
    use std::fs;
    use tempfile::TempDir;

    fn sheet_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("strings.csv"),
            "Keys,English,French\nhello,Hello,Bonjour\nbye,\"Good, bye\",Au revoir\n",
        )
        .unwrap();
        dir
    }

    fn load(dir: &TempDir) -> Localizer<FileSource> {
        Localizer::load(
            FileSource::new(dir.path()),
            LocalizationConfig::default(),
            "strings",
        )
        .unwrap()
    }

    #[test]
    fn test_load_and_lookup() {
        let dir = sheet_dir();
        let localizer = load(&dir);
        assert_eq!(localizer.get("hello").unwrap(), "Hello");
        assert_eq!(localizer.sheet_id(), "strings");
        assert_eq!(localizer.table().supported_languages(), ["English", "French"]);
    }

    #[test]
    fn test_language_switch_does_not_reread_source() {
        let dir = sheet_dir();
        let mut localizer = load(&dir);

        // Remove the file; switching must still work from retained rows.
        fs::remove_file(dir.path().join("strings.csv")).unwrap();
        localizer.set_language("French").unwrap();
        assert_eq!(localizer.get("hello").unwrap(), "Bonjour");
    }

    #[test]
    fn test_reload_picks_up_changed_text() {
        let dir = sheet_dir();
        let mut localizer = load(&dir);

        fs::write(
            dir.path().join("strings.csv"),
            "Keys,English,French\nhello,Hi,Salut\n",
        )
        .unwrap();
        localizer.reload().unwrap();

        assert_eq!(localizer.get("hello").unwrap(), "Hi");
        assert!(!localizer.contains_key("bye"));
        assert_eq!(localizer.table().default_language(), Some("English"));
    }

    #[test]
    fn test_failed_reload_keeps_previous_table() {
        let dir = sheet_dir();
        let mut localizer = load(&dir);

        fs::remove_file(dir.path().join("strings.csv")).unwrap();
        assert!(matches!(
            localizer.reload().unwrap_err(),
            LocalizationError::Io(_)
        ));
        assert_eq!(localizer.get("hello").unwrap(), "Hello");
    }

    #[test]
    fn test_switch_sheet_keeps_default_language() {
        let dir = sheet_dir();
        fs::write(
            dir.path().join("menu.csv"),
            "Keys,German,English\nstart,Start,Begin\n",
        )
        .unwrap();

        let mut localizer = load(&dir);
        localizer.switch_sheet("menu").unwrap();

        assert_eq!(localizer.sheet_id(), "menu");
        // English was the first sheet's default and is still supported.
        assert_eq!(localizer.table().current_language(), Some("English"));
        assert_eq!(localizer.get("start").unwrap(), "Begin");
    }
}
