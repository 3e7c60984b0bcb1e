//! Application constants for localization table handling
//!
//! Default column naming and the splitting rules for the translation
//! sheet format.

/// Default name of the header column holding language-independent keys
pub const DEFAULT_KEY_HEADER: &str = "Keys";

/// Line separator pattern; sheets exported from different tools mix
/// `\r\n`, `\n\r`, `\n` and `\r`, sometimes within one file
pub const LINE_SPLIT_PATTERN: &str = r"\r\n|\n\r|\n|\r";

/// The quote character a field may be wrapped in to contain a comma
pub const FIELD_QUOTE: char = '"';

/// File extension assumed when resolving a sheet identifier on disk
pub const SHEET_EXTENSION: &str = "csv";
