//! The output parser and its family dispatch

use crate::error::ParseError;
use crate::extract::{last_non_empty_line, leading_integer, UNAVAILABLE};
use crate::sink::TracingSink;
use asterisk_domain::{ErrorSink, ExecutionError, Family, Record, Severity};
use std::fmt::Display;

/// What a family parser receives: the raw reply, or the execution failure
pub type Output<'a> = Result<&'a str, &'a ExecutionError>;

/// Forwards events with a trailing `cmd` field
pub(crate) struct CommandSink<'a> {
    inner: &'a dyn ErrorSink,
    cmd: &'static str,
}

impl ErrorSink for CommandSink<'_> {
    fn log(&self, severity: Severity, fields: &[(&str, &dyn Display)]) {
        let mut tagged: Vec<(&str, &dyn Display)> = fields.to_vec();
        tagged.push(("cmd", &self.cmd));
        self.inner.log(severity, &tagged);
    }
}

/// Turns console replies into typed records
///
/// Every method is total: on execution failure it returns the family's
/// sentinel without looking at the text, and on a malformed reply it reports
/// through the sink and falls back to sentinel values.
#[derive(Debug, Clone, Default)]
pub struct OutputParser<S = TracingSink> {
    sink: S,
}

impl OutputParser<TracingSink> {
    /// Parser reporting through `tracing`
    pub fn with_tracing() -> Self {
        Self::new(TracingSink)
    }
}

impl<S: ErrorSink> OutputParser<S> {
    /// Create a parser reporting to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink this parser reports to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sink that tags every event with `family`'s command
    pub(crate) fn command_sink(&self, family: Family) -> CommandSink<'_> {
        CommandSink {
            inner: &self.sink,
            cmd: family.command(),
        }
    }

    /// Report a reply that does not have the shape a family expects
    pub(crate) fn mismatch(&self, family: Family, err: &ParseError, output: &str) {
        self.sink.log(
            Severity::Error,
            &[("err", err), ("cmd", &family.command()), ("output", &output)],
        );
    }

    /// Report a single field or row that could not be converted
    pub(crate) fn conversion(&self, family: Family, err: &ParseError) {
        self.sink
            .log(Severity::Error, &[("err", err), ("cmd", &family.command())]);
    }

    /// Leading integer of the last non-empty line, or `-1`
    ///
    /// Shared by every family whose reply ends in a summary such as
    /// `7 active SIP dialogs`.
    pub(crate) fn summary_count(&self, family: Family, out: &str) -> i64 {
        let last = last_non_empty_line(out);
        if last.trim().is_empty() {
            self.mismatch(family, &ParseError::EmptyOutput(family.as_str()), out);
            return UNAVAILABLE;
        }
        leading_integer(last, &self.command_sink(family))
    }

    /// Parse `output` as a reply of `family`
    pub fn parse(&self, family: Family, output: Output<'_>) -> Record {
        match family {
            Family::Uptime => Record::Uptime(self.uptime(output)),
            Family::Channels => Record::Channels(self.channels(output)),
            Family::Peers => Record::Peers(self.peers(output)),
            Family::Threads => Record::Threads(self.threads(output)),
            Family::Agents => Record::Agents(self.agents(output)),
            Family::OnlineAgents => Record::OnlineAgents(self.online_agents(output)),
            Family::Bridges => Record::Bridges(self.bridges(output)),
            Family::BridgeTechnologies => {
                Record::BridgeTechnologies(self.bridge_technologies(output))
            }
            Family::Calendars => Record::Calendars(self.calendars(output)),
            Family::ConfBridgeMenus => Record::ConfBridgeMenus(self.conf_bridge_menus(output)),
            Family::ConfBridgeProfiles => {
                Record::ConfBridgeProfiles(self.conf_bridge_profiles(output))
            }
            Family::ConfBridgeUsers => Record::ConfBridgeUsers(self.conf_bridge_users(output)),
            Family::ChannelTypes => Record::ChannelTypes(self.channel_types(output)),
            Family::Images => Record::Images(self.images(output)),
            Family::SystemInfo => Record::SystemInfo(self.system_info(output)),
            Family::TaskProcessors => Record::TaskProcessors(self.task_processors(output)),
            Family::Version => Record::Version(self.version(output)),
            Family::IaxChannels => Record::IaxChannels(self.iax_channels(output)),
            Family::Modules => Record::Modules(self.modules(output)),
            Family::SipDialogs => Record::SipDialogs(self.sip_dialogs(output)),
            Family::SipSubscriptions => Record::SipSubscriptions(self.sip_subscriptions(output)),
            Family::SipChannels => Record::SipChannels(self.sip_channels(output)),
            Family::Users => Record::Users(self.users(output)),
        }
    }
}
