//! Text extraction primitives shared by every family parser

use crate::error::ParseError;
use asterisk_domain::{ErrorSink, Severity};

/// Value returned by the integer extractors when a token cannot be read
pub const UNAVAILABLE: i64 = -1;

/// Strip exactly one trailing newline, if present
pub fn sanitize(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

/// Strict base-10 conversion of a single token
pub fn parse_int(token: &str) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|source| ParseError::InvalidInteger {
        value: token.to_string(),
        source,
    })
}

/// First whitespace-delimited token of a line (empty for a blank line)
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Parse the first token of `line` as an integer
///
/// Logs and returns `-1` on empty input or a non-numeric token.
pub fn leading_integer(line: &str, sink: &dyn ErrorSink) -> i64 {
    match parse_int(first_token(line)) {
        Ok(value) => value,
        Err(err) => {
            sink.log(Severity::Error, &[("err", &err), ("line", &line)]);
            UNAVAILABLE
        }
    }
}

/// Parse the text after the last `delimiter` of `line` as an integer
///
/// A line without the delimiter is parsed whole. Same failure policy as
/// [`leading_integer`].
pub fn trailing_value_after(line: &str, delimiter: char, sink: &dyn ErrorSink) -> i64 {
    let tail = line.rsplit(delimiter).next().unwrap_or(line).trim();

    match parse_int(tail) {
        Ok(value) => value,
        Err(err) => {
            sink.log(Severity::Error, &[("err", &err), ("line", &line)]);
            UNAVAILABLE
        }
    }
}

/// The last line of `text`, stepping back once over a trailing newline
pub fn last_non_empty_line(text: &str) -> &str {
    if text.is_empty() {
        return "";
    }

    let mut lines = text.rsplit('\n');
    let last = lines.next().unwrap_or("");
    if last.is_empty() {
        return lines.next().unwrap_or("");
    }
    last
}

/// Number of newline-delimited lines, ignoring the empty tail of a final newline
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let count = text.matches('\n').count() + 1;
    if text.ends_with('\n') {
        count - 1
    } else {
        count
    }
}
