// File: src/parsers/mod.rs

pub mod csv;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed field names, in output order. The first line of input is
/// data like any other; there is no header row.
pub const FIELD_NAMES: [&str; 4] = ["timestamp", "duration", "operation", "tag"];

/// One decoded trace row.
///
/// All values are kept verbatim as strings; nothing is parsed into
/// numbers or timestamps. Struct field order here is the key order in
/// the JSON output. A short line leaves the unfilled trailing fields
/// as `None`, serialized as JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: Option<String>,
    pub duration: Option<String>,
    pub operation: Option<String>,
    pub tag: Option<String>,
    /// Collective bucket for fields past the fourth. Omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl Record {
    /// Maps split fields onto the fixed names, positionally.
    pub fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Record {
            timestamp: fields.next(),
            duration: fields.next(),
            operation: fields.next(),
            tag: fields.next(),
            extra: fields.collect(),
        }
    }
}

/// Parses a single line of input into a Record.
/// `lineno` is 1-based and only used for diagnostics.
pub fn parse_record_line(line: &str, lineno: usize) -> Result<Record, ParseError> {
    match csv::split_fields(line) {
        Ok(fields) => Ok(Record::from_fields(fields)),
        Err(source) => Err(ParseError { lineno, source }),
    }
}

/// A line the delimited-text parser could not interpret.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    pub lineno: usize,
    pub source: csv::SplitError,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}", self.lineno, self.source)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
