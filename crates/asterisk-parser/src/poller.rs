//! Runs console commands and parses their replies

use crate::parser::OutputParser;
use crate::sink::TracingSink;
use asterisk_domain::{
    AgentsInfo, BridgeTechnologiesInfo, BridgesInfo, CalendarsInfo, ChannelTypesInfo,
    ChannelsInfo, CommandExecutor, ConfBridgeInfo, ErrorSink, ExecutionError, Family,
    IaxChannelsInfo, ImagesInfo, ModulesInfo, PeersInfo, Record, Severity, SipChannelsInfo,
    SystemInfo, TaskProcessorsInfo, ThreadsInfo, UptimeInfo, UsersInfo, VersionInfo,
};

/// Pairs an executor with a parser
///
/// Each read runs the family's command once and never fails: an execution
/// error is reported through the sink and the family's sentinel is returned.
///
/// # Examples
///
/// ```
/// use asterisk_parser::{MockExecutor, Poller};
///
/// let executor = MockExecutor::default().with_reply("module show", "6 modules loaded\n");
/// let poller = Poller::with_tracing(executor);
/// assert_eq!(poller.modules().module_count, 6);
/// ```
#[derive(Debug, Clone)]
pub struct Poller<E, S = TracingSink> {
    executor: E,
    parser: OutputParser<S>,
}

impl<E: CommandExecutor> Poller<E, TracingSink> {
    /// Poller reporting through `tracing`
    pub fn with_tracing(executor: E) -> Self {
        Self::new(executor, TracingSink)
    }
}

impl<E: CommandExecutor, S: ErrorSink> Poller<E, S> {
    /// Create a poller
    pub fn new(executor: E, sink: S) -> Self {
        Self {
            executor,
            parser: OutputParser::new(sink),
        }
    }

    /// The underlying parser
    pub fn parser(&self) -> &OutputParser<S> {
        &self.parser
    }

    /// The underlying executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn run(&self, family: Family) -> Result<String, ExecutionError> {
        let command = family.command();
        self.parser
            .sink()
            .log(Severity::Debug, &[("msg", &"Running command"), ("cmd", &command)]);

        self.executor.run(command).inspect_err(|err| {
            self.parser
                .sink()
                .log(Severity::Error, &[("err", err), ("cmd", &command)]);
        })
    }

    /// Run any family and wrap the result
    pub fn collect(&self, family: Family) -> Record {
        let out = self.run(family);
        self.parser.parse(family, out.as_deref())
    }

    /// `core show uptime seconds`
    pub fn uptime(&self) -> UptimeInfo {
        self.parser.uptime(self.run(Family::Uptime).as_deref())
    }

    /// `core show channels count`
    pub fn channels(&self) -> ChannelsInfo {
        self.parser.channels(self.run(Family::Channels).as_deref())
    }

    /// `sip show peers`
    pub fn peers(&self) -> PeersInfo {
        self.parser.peers(self.run(Family::Peers).as_deref())
    }

    /// `core show threads`
    pub fn threads(&self) -> ThreadsInfo {
        self.parser.threads(self.run(Family::Threads).as_deref())
    }

    /// `agent show all`
    pub fn agents(&self) -> AgentsInfo {
        self.parser.agents(self.run(Family::Agents).as_deref())
    }

    /// `agent show online`
    pub fn online_agents(&self) -> AgentsInfo {
        self.parser
            .online_agents(self.run(Family::OnlineAgents).as_deref())
    }

    /// `bridge show all`
    pub fn bridges(&self) -> BridgesInfo {
        self.parser.bridges(self.run(Family::Bridges).as_deref())
    }

    /// `bridge technology show`
    pub fn bridge_technologies(&self) -> BridgeTechnologiesInfo {
        self.parser
            .bridge_technologies(self.run(Family::BridgeTechnologies).as_deref())
    }

    /// `calendar show calendars`
    pub fn calendars(&self) -> CalendarsInfo {
        self.parser.calendars(self.run(Family::Calendars).as_deref())
    }

    /// Menus, bridge profiles and user profiles in one record
    pub fn conf_bridge(&self) -> ConfBridgeInfo {
        ConfBridgeInfo {
            menus: self
                .parser
                .conf_bridge_menus(self.run(Family::ConfBridgeMenus).as_deref()),
            profiles: self
                .parser
                .conf_bridge_profiles(self.run(Family::ConfBridgeProfiles).as_deref()),
            users: self
                .parser
                .conf_bridge_users(self.run(Family::ConfBridgeUsers).as_deref()),
        }
    }

    /// `core show channeltypes`
    pub fn channel_types(&self) -> ChannelTypesInfo {
        self.parser
            .channel_types(self.run(Family::ChannelTypes).as_deref())
    }

    /// `core show image formats`
    pub fn images(&self) -> ImagesInfo {
        self.parser.images(self.run(Family::Images).as_deref())
    }

    /// `core show sysinfo`
    pub fn system_info(&self) -> SystemInfo {
        self.parser.system_info(self.run(Family::SystemInfo).as_deref())
    }

    /// `core show taskprocessors`
    pub fn task_processors(&self) -> TaskProcessorsInfo {
        self.parser
            .task_processors(self.run(Family::TaskProcessors).as_deref())
    }

    /// `core show version`
    pub fn version(&self) -> VersionInfo {
        self.parser.version(self.run(Family::Version).as_deref())
    }

    /// `iax2 show channels`
    pub fn iax_channels(&self) -> IaxChannelsInfo {
        self.parser
            .iax_channels(self.run(Family::IaxChannels).as_deref())
    }

    /// `module show`
    pub fn modules(&self) -> ModulesInfo {
        self.parser.modules(self.run(Family::Modules).as_deref())
    }

    /// Dialogs, subscriptions and channels in one record
    pub fn sip_channels(&self) -> SipChannelsInfo {
        let dialogs = self.parser.sip_dialogs(self.run(Family::SipDialogs).as_deref());
        let subscriptions = self
            .parser
            .sip_subscriptions(self.run(Family::SipSubscriptions).as_deref());
        let channels = self
            .parser
            .sip_channels(self.run(Family::SipChannels).as_deref());

        SipChannelsInfo {
            active_sip_dialogs: dialogs.count,
            active_sip_subscriptions: subscriptions.count,
            active_sip_channels: channels.count,
        }
    }

    /// `sip show users`
    pub fn users(&self) -> UsersInfo {
        self.parser.users(self.run(Family::Users).as_deref())
    }
}
