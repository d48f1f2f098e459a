// File: src/parsers/csv.rs

use std::fmt;

/// A quoting problem found while splitting a line.
#[derive(Debug, PartialEq, Eq)]
pub enum SplitError {
    /// A quoted field was still open when the line ended.
    UnterminatedQuote,
    /// Something other than a comma followed a closing quote.
    StrayAfterQuote(char),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SplitError::UnterminatedQuote => write!(f, "unterminated quoted field"),
            SplitError::StrayAfterQuote(c) => {
                write!(f, "unexpected character {c:?} after closing quote")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Splits a single line into its comma-separated fields.
///
/// Strict RFC 4180 quoting: a field starting with '"' runs until the
/// matching closing quote, a doubled quote inside it is a literal '"',
/// and only a comma (or end of line) may follow the closing quote.
/// Field values are returned verbatim, no trimming.
pub fn split_fields(line: &str) -> Result<Vec<String>, SplitError> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let field = if chars.peek() == Some(&'"') {
            chars.next(); // consume opening quote
            let mut field = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        // Escaped quote: "" -> "
                        chars.next();
                        field.push('"');
                    }
                    '"' => {
                        closed = true;
                        break;
                    }
                    c => field.push(c),
                }
            }
            if !closed {
                return Err(SplitError::UnterminatedQuote);
            }
            field
        } else {
            let mut field = String::new();
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                chars.next();
                field.push(c);
            }
            field
        };
        fields.push(field);

        match chars.next() {
            None => break,
            Some(',') => {
                if chars.peek().is_none() {
                    // Trailing comma closes an empty final field
                    fields.push(String::new());
                    break;
                }
            }
            Some(c) => return Err(SplitError::StrayAfterQuote(c)),
        }
    }

    Ok(fields)
}
