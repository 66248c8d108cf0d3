//! Asterisk Domain Layer
//!
//! This crate contains the value types shared by every other layer of the
//! exporter. It has no required external dependencies and defines the typed
//! records produced from console replies, the table of sentinel records, and
//! the trait interfaces for the two collaborators the parsing engine talks to.
//!
//! ## Key Concepts
//!
//! - **Family**: one console command and the record type it produces
//! - **Record**: the typed result of parsing one family's output
//! - **Sentinel**: the fixed "unavailable" record returned when parsing fails
//! - **CommandExecutor**: runs a console command and returns its raw reply
//! - **ErrorSink**: receives structured events for recoverable anomalies
//!
//! ## Architecture
//!
//! - No mandatory external crate dependencies (`serde` is opt-in)
//! - Records are immutable value objects, rebuilt on every poll
//! - Infrastructure (process execution, logging backends) lives elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defaults;
pub mod family;
pub mod records;
pub mod traits;

// Re-exports for convenience
pub use defaults::Sentinel;
pub use family::{Family, Record};
pub use records::{
    ActiveCount, AgentsInfo, BridgeTechnologiesInfo, BridgeTechnology, BridgesInfo,
    CalendarsInfo, ChannelType, ChannelTypesInfo, ChannelsInfo, ConfBridgeInfo, ConfBridgeList,
    IaxChannelsInfo, ImagesInfo, ModulesInfo, PeersInfo, SipChannelsInfo, SystemInfo,
    TaskProcessorsInfo, ThreadsInfo, UptimeInfo, UsersInfo, VersionInfo,
};
pub use traits::{CommandExecutor, ErrorSink, ExecutionError, Severity};
