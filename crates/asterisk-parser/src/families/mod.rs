//! Family parsers
//!
//! Each submodule adds the methods for one command group to
//! [`OutputParser`](crate::OutputParser).

mod agent;
mod bridge;
mod calendar;
mod confbridge;
mod core_show;
mod iax2;
mod module;
mod sip;
