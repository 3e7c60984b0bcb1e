//! Sheet text loading.
//!
//! The table builder only ever sees raw text; where that text lives is
//! a collaborator concern behind the [`TextSource`] trait. Ships with a
//! filesystem-backed source and an in-memory one for embedded sheets
//! and tests.

use crate::constants::SHEET_EXTENSION;
use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves a sheet identifier to raw CSV text
pub trait TextSource {
    fn load(&self, id: &str) -> Result<String>;
}

/// Loads sheets from `<root>/<id>.csv`. An identifier that already
/// carries an extension is used as-is.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        let path = self.root.join(id);
        if path.extension().is_some() {
            path
        } else {
            path.with_extension(SHEET_EXTENSION)
        }
    }
}

impl TextSource for FileSource {
    fn load(&self, id: &str) -> Result<String> {
        let path = self.resolve(id);
        debug!("loading sheet from {}", path.display());
        Ok(fs::read_to_string(&path)?)
    }
}

/// Serves sheet text registered up front, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    sheets: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sheet under an identifier, replacing any previous text
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.sheets.insert(id.into(), text.into());
    }
}

impl TextSource for StaticSource {
    fn load(&self, id: &str) -> Result<String> {
        self.sheets.get(id).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no sheet registered as '{id}'"),
            )
            .into()
        })
    }
}

/// Convenience for hosts that already have a concrete path in hand
pub fn load_sheet_file(path: &Path) -> Result<String> {
    debug!("loading sheet from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocalizationError;
    use std::io::Write;

    #[test]
    fn test_file_source_appends_extension() {
        let source = FileSource::new("/tmp/sheets");
        assert_eq!(
            source.resolve("strings"),
            PathBuf::from("/tmp/sheets/strings.csv")
        );
        assert_eq!(
            source.resolve("strings.tsv"),
            PathBuf::from("/tmp/sheets/strings.tsv")
        );
    }

    #[test]
    fn test_file_source_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("strings.csv")).unwrap();
        writeln!(file, "Keys,English").unwrap();
        writeln!(file, "hello,Hello").unwrap();

        let source = FileSource::new(dir.path());
        let text = source.load("strings").unwrap();
        assert!(text.starts_with("Keys,English"));
    }

    #[test]
    fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(matches!(
            source.load("absent").unwrap_err(),
            LocalizationError::Io(_)
        ));
    }

    #[test]
    fn test_static_source() {
        let mut source = StaticSource::new();
        source.insert("strings", "Keys,English\nhello,Hello");
        assert_eq!(source.load("strings").unwrap(), "Keys,English\nhello,Hello");
        assert!(source.load("other").is_err());
    }
}
