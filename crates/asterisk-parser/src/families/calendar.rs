//! `calendar show calendars`

use crate::error::ParseError;
use crate::extract::count_lines;
use crate::parser::{Output, OutputParser};
use asterisk_domain::defaults;
use asterisk_domain::{CalendarsInfo, ErrorSink, Family};

impl<S: ErrorSink> OutputParser<S> {
    /// Count the calendars listed under a header and a separator line
    ///
    /// ```text
    /// Calendar             Type       Status
    /// --------             ----       ------
    /// cal1                 ical       0
    /// ```
    pub fn calendars(&self, output: Output<'_>) -> CalendarsInfo {
        let Ok(out) = output else {
            return defaults::CALENDARS;
        };

        let lines = count_lines(out);
        if lines < 2 {
            let err = ParseError::LineCount {
                family: Family::Calendars.as_str(),
                expected: 2,
                actual: lines,
            };
            self.mismatch(Family::Calendars, &err, out);
            return defaults::CALENDARS;
        }

        CalendarsInfo {
            count: lines as i64 - 2,
        }
    }
}
