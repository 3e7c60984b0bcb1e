//! Lingua Table
//!
//! A small library for CSV-backed localization tables: one header row
//! naming a key column plus one column per language, parsed once into
//! row records, then served as a key→value mapping for whichever
//! language is currently selected.
//!
//! This library provides:
//! - A quote-aware row parser for the sheet dialect (commas inside
//!   double-quoted fields, mixed line endings, blank-line tolerance)
//! - Language discovery from the header row and last-row-wins entry
//!   maps per language
//! - Language switching that rebuilds the mapping from retained rows
//!   without re-reading the sheet text
//! - Pluggable sheet sources and a change-notification hook for
//!   display code
//!
//! ```
//! use lingua_table::{LocalizationConfig, LanguageTable, reader};
//!
//! let sheet = reader::read("Keys,English,French\nhello,Hello,Bonjour");
//! let mut table = LanguageTable::build(&sheet, &LocalizationConfig::default()).unwrap();
//! assert_eq!(table.get("hello").unwrap(), "Hello");
//!
//! table.set_language("French").unwrap();
//! assert_eq!(table.get("hello").unwrap(), "Bonjour");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod localizer;
pub mod reader;
pub mod source;
pub mod table;

// Re-export commonly used types
pub use config::LocalizationConfig;
pub use error::{LocalizationError, Result};
pub use localizer::Localizer;
pub use reader::{CsvTable, RowRecord};
pub use source::{FileSource, StaticSource, TextSource};
pub use table::{LanguageChange, LanguageTable};
