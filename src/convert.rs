// File: src/convert.rs

use crate::parsers::{self, ParseError, Record};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::io::{self, Write};

/// Anything that can stop a conversion run.
#[derive(Debug)]
pub enum ConvertError {
    Parse(ParseError),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvertError::Parse(e) => write!(f, "malformed input: {e}"),
            ConvertError::Json(e) => write!(f, "JSON encoding failed: {e}"),
            ConvertError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Parse(e) => Some(e),
            ConvertError::Json(e) => Some(e),
            ConvertError::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for ConvertError {
    fn from(e: ParseError) -> Self {
        ConvertError::Parse(e)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        ConvertError::Json(e)
    }
}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Io(e)
    }
}

/// Parses the whole input into records, preserving line order.
///
/// Fully blank lines produce no record (so a trailing newline adds
/// nothing); `lines()` already handles CRLF endings. The first failing
/// line aborts the run.
pub fn convert(input: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        records.push(parsers::parse_record_line(line, idx + 1)?);
    }
    Ok(records)
}

/// Serializes records as one pretty-printed JSON array, 4-space indent.
pub fn to_json_string(records: &[Record]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(records.len() * 128 + 2);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // The serializer only ever emits valid UTF-8.
    Ok(String::from_utf8(buf).expect("serializer emitted invalid UTF-8"))
}

/// Writes the JSON document for `records` in a single write, with a
/// trailing newline.
pub fn write_json<W: Write>(records: &[Record], writer: &mut W) -> Result<(), ConvertError> {
    let mut doc = to_json_string(records)?;
    doc.push('\n');
    writer.write_all(doc.as_bytes())?;
    Ok(())
}

/// Full conversion: parse everything first, then emit everything.
/// A parse failure means nothing at all is written.
pub fn convert_to_writer<W: Write>(input: &str, writer: &mut W) -> Result<(), ConvertError> {
    let records = convert(input)?;
    write_json(&records, writer)
}

#[cfg(test)]
mod tests {
    use super::{convert, convert_to_writer, to_json_string};

    #[test]
    fn empty_input_yields_empty_array() {
        let records = convert("").unwrap();
        assert!(records.is_empty());
        assert_eq!(to_json_string(&records).unwrap(), "[]");
    }

    #[test]
    fn spec_example_document() {
        let records = convert("1,2,start,a\n3,4,stop,b\n").unwrap();
        let expected = r#"[
    {
        "timestamp": "1",
        "duration": "2",
        "operation": "start",
        "tag": "a"
    },
    {
        "timestamp": "3",
        "duration": "4",
        "operation": "stop",
        "tag": "b"
    }
]"#;
        assert_eq!(to_json_string(&records).unwrap(), expected);
    }

    #[test]
    fn first_line_is_data_not_a_header() {
        let records = convert("timestamp,duration,operation,tag\n1,2,start,a\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp.as_deref(), Some("timestamp"));
    }

    #[test]
    fn short_line_serializes_missing_fields_as_null() {
        let records = convert("5,6\n").unwrap();
        let expected = r#"[
    {
        "timestamp": "5",
        "duration": "6",
        "operation": null,
        "tag": null
    }
]"#;
        assert_eq!(to_json_string(&records).unwrap(), expected);
    }

    #[test]
    fn overflow_fields_land_under_extra() {
        let records = convert("1,2,start,a,spill\n").unwrap();
        let doc = to_json_string(&records).unwrap();
        assert!(doc.contains("\"extra\": ["));
        assert!(doc.contains("\"spill\""));
    }

    #[test]
    fn order_matches_input_order() {
        let input: String = (0..50).map(|i| format!("{i},1,op,t\n")).collect();
        let records = convert(&input).unwrap();
        assert_eq!(records.len(), 50);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.timestamp.as_deref(), Some(i.to_string().as_str()));
        }
    }

    #[test]
    fn blank_lines_add_no_record() {
        let records = convert("1,2,start,a\n\n\n3,4,stop,b\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let records = convert("1,2,start,a\r\n").unwrap();
        assert_eq!(records[0].tag.as_deref(), Some("a"));
    }

    #[test]
    fn parse_failure_writes_nothing() {
        let mut out = Vec::new();
        let err = convert_to_writer("1,2,start,a\n\"broken\n", &mut out).unwrap_err();
        assert!(out.is_empty());
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn writer_output_ends_with_newline() {
        let mut out = Vec::new();
        convert_to_writer("1,2,start,a\n", &mut out).unwrap();
        assert!(out.ends_with(b"\n"));
    }
}
