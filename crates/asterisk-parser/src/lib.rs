//! Asterisk Console Output Parser
//!
//! Turns the text printed by `asterisk -rx '<command>'` into the typed
//! records of [`asterisk_domain`].
//!
//! # Overview
//!
//! Every supported command has a parser method on [`OutputParser`]. A parser
//! receives either the raw reply or the execution failure and always returns
//! a record:
//!
//! - execution failure: the family's sentinel record, nothing logged
//! - malformed reply: an event on the [`ErrorSink`](asterisk_domain::ErrorSink)
//!   and sentinel values, for the whole record or only the affected fields
//! - well-formed reply: the parsed record
//!
//! [`Poller`] pairs the parser with a
//! [`CommandExecutor`](asterisk_domain::CommandExecutor) so callers only pick
//! a family.
//!
//! # Example
//!
//! ```
//! use asterisk_parser::OutputParser;
//!
//! let parser = OutputParser::with_tracing();
//! let uptime = parser.uptime(Ok("System uptime: 36520\nLast reload: 12345\n"));
//! assert_eq!(uptime.system_uptime_seconds, 36520);
//! assert_eq!(uptime.last_reload_seconds, 12345);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod extract;
mod families;
pub mod mock;
pub mod parser;
pub mod poller;
pub mod sink;
pub mod size;
pub mod table;
pub mod tokens;

pub use error::ParseError;
pub use mock::MockExecutor;
pub use parser::{Output, OutputParser};
pub use poller::Poller;
pub use sink::{MemorySink, SinkEvent, TracingSink};

#[cfg(test)]
mod tests;
