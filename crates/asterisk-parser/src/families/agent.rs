//! `agent show ...` replies
//!
//! Both commands end with the same summary line:
//!
//! ```text
//! Defined agents: 5, Logged in: 3, Talking: 1
//! ```

use crate::error::ParseError;
use crate::extract::{last_non_empty_line, parse_int, UNAVAILABLE};
use crate::parser::{Output, OutputParser};
use crate::tokens::find_integers;
use asterisk_domain::defaults;
use asterisk_domain::{AgentsInfo, ErrorSink, Family};

impl<S: ErrorSink> OutputParser<S> {
    /// `agent show all`
    pub fn agents(&self, output: Output<'_>) -> AgentsInfo {
        self.agent_summary(Family::Agents, output)
    }

    /// `agent show online`
    pub fn online_agents(&self, output: Output<'_>) -> AgentsInfo {
        self.agent_summary(Family::OnlineAgents, output)
    }

    fn agent_summary(&self, family: Family, output: Output<'_>) -> AgentsInfo {
        let Ok(out) = output else {
            return defaults::AGENTS;
        };

        let last = last_non_empty_line(out);
        if last.trim().is_empty() {
            self.mismatch(family, &ParseError::EmptyOutput(family.as_str()), out);
            return defaults::AGENTS;
        }

        let numbers = find_integers(last, 3);
        if numbers.len() < 3 {
            let err = ParseError::MissingTokens {
                expected: 3,
                found: numbers.len(),
                line: last.to_string(),
            };
            self.conversion(family, &err);
        }

        let field = |index: usize| match numbers.get(index) {
            Some(token) => parse_int(token).unwrap_or_else(|err| {
                self.conversion(family, &err);
                UNAVAILABLE
            }),
            None => UNAVAILABLE,
        };

        AgentsInfo {
            defined_agents: field(0),
            logged_agents: field(1),
            talking_agents: field(2),
        }
    }
}
