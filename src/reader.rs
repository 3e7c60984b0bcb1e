//! Translation sheet row parsing.
//!
//! Splits raw CSV text into a header row plus an ordered sequence of
//! row records. The format is a pragmatic dialect rather than RFC 4180:
//! a field may be wrapped in double quotes to contain a literal comma,
//! there is no escaped-quote or multi-line field support, and every
//! backslash character is removed from cell values. These quirks are
//! part of the format contract for existing sheets and are preserved
//! here deliberately.

use crate::constants::{FIELD_QUOTE, LINE_SPLIT_PATTERN};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LINE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINE_SPLIT_PATTERN).unwrap());

/// One data row: an ordered mapping from column header to cell value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    /// Look up a cell by its column header
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Whether this row has a cell for the given column
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    /// Insert a cell, replacing the value if the column is already
    /// present (a duplicated header keeps its first position)
    fn insert(&mut self, column: &str, value: String) {
        match self.fields.iter_mut().find(|(header, _)| header == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }
}

/// Parsed sheet: header names in source order plus the data rows
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    /// Column names from the first line, unmodified
    pub headers: Vec<String>,

    /// Data rows in source order; blank lines are not represented
    pub rows: Vec<RowRecord>,
}

impl CsvTable {
    /// Whether the sheet had no header line at all
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Parse raw sheet text into header names and row records.
///
/// Line 0 is the header row. A data line is skipped when it is empty or
/// its first field is empty, which is how trailing blank lines are
/// tolerated. Cells are paired with headers positionally; a short row
/// simply lacks the trailing columns, and extra cells beyond the header
/// width are dropped.
pub fn read(text: &str) -> CsvTable {
    let lines: Vec<&str> = LINE_SPLIT.split(text).collect();
    let Some((header_line, data_lines)) = lines.split_first() else {
        return CsvTable::default();
    };
    if header_line.is_empty() {
        return CsvTable::default();
    }

    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for line in data_lines {
        let fields = split_fields(line);
        if fields.is_empty() || fields[0].is_empty() {
            continue;
        }

        let mut record = RowRecord::default();
        for (header, raw) in headers.iter().zip(&fields) {
            record.insert(header, clean_cell(raw));
        }
        rows.push(record);
    }

    debug!(
        "parsed {} data rows across {} columns",
        rows.len(),
        headers.len()
    );

    CsvTable { headers, rows }
}

/// Split one line on commas, honouring double-quoted fields.
///
/// A comma acts as a separator only when the number of quote characters
/// to its right is even. This reproduces the lookahead split rule the
/// sheet format was defined with, including its best-effort behaviour
/// on unbalanced quotes.
fn split_fields(line: &str) -> Vec<&str> {
    let total_quotes = line.matches(FIELD_QUOTE).count();
    let mut fields = Vec::new();
    let mut seen_quotes = 0;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        if c == FIELD_QUOTE {
            seen_quotes += 1;
        } else if c == ',' && (total_quotes - seen_quotes) % 2 == 0 {
            fields.push(&line[start..i]);
            start = i + 1;
        }
    }
    fields.push(&line[start..]);
    fields
}

/// Normalise a raw cell: trim at most one wrapping quote from each end,
/// then remove every backslash. This is not a general unescape; it is
/// the exact transformation existing sheets were authored against.
fn clean_cell(raw: &str) -> String {
    let unquoted = raw.strip_prefix(FIELD_QUOTE).unwrap_or(raw);
    let unquoted = unquoted.strip_suffix(FIELD_QUOTE).unwrap_or(unquoted);
    unquoted.replace('\\', "")
}
