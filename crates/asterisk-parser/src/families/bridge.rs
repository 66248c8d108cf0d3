//! `bridge ...` replies

use crate::error::ParseError;
use crate::extract::{count_lines, sanitize};
use crate::parser::{Output, OutputParser};
use crate::tokens::find_tokens;
use asterisk_domain::defaults;
use asterisk_domain::{BridgeTechnologiesInfo, BridgeTechnology, BridgesInfo, ErrorSink, Family};

impl<S: ErrorSink> OutputParser<S> {
    /// `bridge show all`: one row per bridge under a header
    pub fn bridges(&self, output: Output<'_>) -> BridgesInfo {
        let Ok(out) = output else {
            return defaults::BRIDGES;
        };

        if out.trim().is_empty() {
            self.mismatch(Family::Bridges, &ParseError::EmptyOutput("bridges"), out);
            return defaults::BRIDGES;
        }

        BridgesInfo {
            count: count_lines(out) as i64 - 1,
        }
    }

    /// `bridge technology show`
    ///
    /// ```text
    /// Name                 Type                 Priority Suspended
    /// softmix              MultiMix                   10 No
    /// ```
    ///
    /// A row with fewer than four cells discards the whole table.
    pub fn bridge_technologies(&self, output: Output<'_>) -> BridgeTechnologiesInfo {
        let Ok(out) = output else {
            return defaults::BRIDGE_TECHNOLOGIES;
        };

        let text = sanitize(out);
        if text.trim().is_empty() {
            let err = ParseError::EmptyOutput(Family::BridgeTechnologies.as_str());
            self.mismatch(Family::BridgeTechnologies, &err, out);
            return defaults::BRIDGE_TECHNOLOGIES;
        }

        let mut technologies = Vec::new();
        for row in text.split('\n').skip(1).filter(|r| !r.trim().is_empty()) {
            let cells = find_tokens(row, 4);
            let [name, kind, priority, suspended] = cells[..] else {
                let err = ParseError::MissingTokens {
                    expected: 4,
                    found: cells.len(),
                    line: row.to_string(),
                };
                self.mismatch(Family::BridgeTechnologies, &err, row);
                return defaults::BRIDGE_TECHNOLOGIES;
            };

            technologies.push(BridgeTechnology {
                name: name.to_string(),
                kind: kind.to_string(),
                priority: priority.to_string(),
                suspended: suspended.to_string(),
            });
        }

        BridgeTechnologiesInfo { technologies }
    }
}
