//! Error types for the parsing engine
//!
//! None of these ever escape a family parser. They are rendered into the
//! `err` field of an [`ErrorSink`](asterisk_domain::ErrorSink) event and the
//! parser falls back to a sentinel value.

use std::num::ParseIntError;
use thiserror::Error;

/// Structural and conversion failures found while reading a console reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The command succeeded but printed nothing usable
    #[error("{0} output is empty")]
    EmptyOutput(&'static str),

    /// Wrong number of lines for a fixed-shape reply
    #[error("{family} output is not well formatted: expected {expected} lines, got {actual}")]
    LineCount {
        /// Family name
        family: &'static str,
        /// Expected line count
        expected: usize,
        /// Actual line count
        actual: usize,
    },

    /// No line carries the required substrings
    #[error("{family} output has no line containing {anchor}")]
    MissingAnchor {
        /// Family name
        family: &'static str,
        /// Description of the anchor
        anchor: &'static str,
    },

    /// A tokenizer found fewer matches than the layout requires
    #[error("expected {expected} tokens, found {found} in {line:?}")]
    MissingTokens {
        /// Required match count
        expected: usize,
        /// Matches found
        found: usize,
        /// Offending line
        line: String,
    },

    /// A header anchor could not be located
    #[error("column {0:?} not found in header")]
    MissingColumn(&'static str),

    /// A data row ends before a located column
    #[error("row is shorter than column {column:?} at offset {offset}: {line:?}")]
    RowTooShort {
        /// Column name
        column: &'static str,
        /// Byte offset of the column in the header
        offset: usize,
        /// Offending row
        line: String,
    },

    /// A token expected to be a base-10 integer is not one
    #[error("invalid integer {value:?}: {source}")]
    InvalidInteger {
        /// The token as printed
        value: String,
        /// Underlying conversion error
        source: ParseIntError,
    },

    /// A memory size could not be converted to bytes
    #[error("invalid size {0:?}")]
    InvalidSize(String),
}
