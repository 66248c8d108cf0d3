//! Family module - console commands and the records they produce

use crate::defaults::{self, Sentinel};
use crate::records::*;

/// One console command and its record type
///
/// The console reply of each family is an externally owned, unversioned
/// format; the command strings below are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    /// `core show uptime seconds`
    Uptime,
    /// `core show channels count`
    Channels,
    /// `sip show peers`
    Peers,
    /// `core show threads`
    Threads,
    /// `agent show all`
    Agents,
    /// `agent show online`
    OnlineAgents,
    /// `bridge show all`
    Bridges,
    /// `bridge technology show`
    BridgeTechnologies,
    /// `calendar show calendars`
    Calendars,
    /// `confbridge show menus`
    ConfBridgeMenus,
    /// `confbridge show profile bridges`
    ConfBridgeProfiles,
    /// `confbridge show profile users`
    ConfBridgeUsers,
    /// `core show channeltypes`
    ChannelTypes,
    /// `core show image formats`
    Images,
    /// `core show sysinfo`
    SystemInfo,
    /// `core show taskprocessors`
    TaskProcessors,
    /// `core show version`
    Version,
    /// `iax2 show channels`
    IaxChannels,
    /// `module show`
    Modules,
    /// `sip show channels`
    SipDialogs,
    /// `sip show subscriptions`
    SipSubscriptions,
    /// `sip show channelstats`
    SipChannels,
    /// `sip show users`
    Users,
}

impl Family {
    /// Every family, in declaration order
    pub const ALL: [Family; 23] = [
        Family::Uptime,
        Family::Channels,
        Family::Peers,
        Family::Threads,
        Family::Agents,
        Family::OnlineAgents,
        Family::Bridges,
        Family::BridgeTechnologies,
        Family::Calendars,
        Family::ConfBridgeMenus,
        Family::ConfBridgeProfiles,
        Family::ConfBridgeUsers,
        Family::ChannelTypes,
        Family::Images,
        Family::SystemInfo,
        Family::TaskProcessors,
        Family::Version,
        Family::IaxChannels,
        Family::Modules,
        Family::SipDialogs,
        Family::SipSubscriptions,
        Family::SipChannels,
        Family::Users,
    ];

    /// Get the family name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Uptime => "uptime",
            Family::Channels => "channels",
            Family::Peers => "peers",
            Family::Threads => "threads",
            Family::Agents => "agents",
            Family::OnlineAgents => "online_agents",
            Family::Bridges => "bridges",
            Family::BridgeTechnologies => "bridge_technologies",
            Family::Calendars => "calendars",
            Family::ConfBridgeMenus => "confbridge_menus",
            Family::ConfBridgeProfiles => "confbridge_profiles",
            Family::ConfBridgeUsers => "confbridge_users",
            Family::ChannelTypes => "channel_types",
            Family::Images => "images",
            Family::SystemInfo => "system_info",
            Family::TaskProcessors => "task_processors",
            Family::Version => "version",
            Family::IaxChannels => "iax_channels",
            Family::Modules => "modules",
            Family::SipDialogs => "sip_dialogs",
            Family::SipSubscriptions => "sip_subscriptions",
            Family::SipChannels => "sip_channels",
            Family::Users => "users",
        }
    }

    /// The console command whose reply this family parses
    pub fn command(&self) -> &'static str {
        match self {
            Family::Uptime => "core show uptime seconds",
            Family::Channels => "core show channels count",
            Family::Peers => "sip show peers",
            Family::Threads => "core show threads",
            Family::Agents => "agent show all",
            Family::OnlineAgents => "agent show online",
            Family::Bridges => "bridge show all",
            Family::BridgeTechnologies => "bridge technology show",
            Family::Calendars => "calendar show calendars",
            Family::ConfBridgeMenus => "confbridge show menus",
            Family::ConfBridgeProfiles => "confbridge show profile bridges",
            Family::ConfBridgeUsers => "confbridge show profile users",
            Family::ChannelTypes => "core show channeltypes",
            Family::Images => "core show image formats",
            Family::SystemInfo => "core show sysinfo",
            Family::TaskProcessors => "core show taskprocessors",
            Family::Version => "core show version",
            Family::IaxChannels => "iax2 show channels",
            Family::Modules => "module show",
            Family::SipDialogs => "sip show channels",
            Family::SipSubscriptions => "sip show subscriptions",
            Family::SipChannels => "sip show channelstats",
            Family::Users => "sip show users",
        }
    }

    /// Look up this family's row in the default table
    pub fn default_record(&self) -> Record {
        match self {
            Family::Uptime => Record::Uptime(defaults::UPTIME),
            Family::Channels => Record::Channels(defaults::CHANNELS),
            Family::Peers => Record::Peers(defaults::PEERS),
            Family::Threads => Record::Threads(defaults::THREADS),
            Family::Agents => Record::Agents(defaults::AGENTS),
            Family::OnlineAgents => Record::OnlineAgents(defaults::AGENTS),
            Family::Bridges => Record::Bridges(defaults::BRIDGES),
            Family::BridgeTechnologies => {
                Record::BridgeTechnologies(defaults::BRIDGE_TECHNOLOGIES)
            }
            Family::Calendars => Record::Calendars(defaults::CALENDARS),
            Family::ConfBridgeMenus => Record::ConfBridgeMenus(defaults::CONF_BRIDGE_LIST),
            Family::ConfBridgeProfiles => Record::ConfBridgeProfiles(defaults::CONF_BRIDGE_LIST),
            Family::ConfBridgeUsers => Record::ConfBridgeUsers(defaults::CONF_BRIDGE_LIST),
            Family::ChannelTypes => Record::ChannelTypes(defaults::CHANNEL_TYPES),
            Family::Images => Record::Images(defaults::IMAGES),
            Family::SystemInfo => Record::SystemInfo(defaults::SYSTEM),
            Family::TaskProcessors => Record::TaskProcessors(defaults::TASK_PROCESSORS),
            Family::Version => Record::Version(defaults::VERSION),
            Family::IaxChannels => Record::IaxChannels(defaults::IAX_CHANNELS),
            Family::Modules => Record::Modules(defaults::MODULES),
            Family::SipDialogs => Record::SipDialogs(defaults::ACTIVE_COUNT),
            Family::SipSubscriptions => Record::SipSubscriptions(defaults::ACTIVE_COUNT),
            Family::SipChannels => Record::SipChannels(defaults::ACTIVE_COUNT),
            Family::Users => Record::Users(defaults::USERS),
        }
    }

    /// Parse a family from its name (case-insensitive, `-` accepted for `_`)
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Family::ALL.into_iter().find(|f| f.as_str() == wanted)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid family: {}", s))
    }
}

/// The typed result of parsing one family's output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum Record {
    Uptime(UptimeInfo),
    Channels(ChannelsInfo),
    Peers(PeersInfo),
    Threads(ThreadsInfo),
    Agents(AgentsInfo),
    OnlineAgents(AgentsInfo),
    Bridges(BridgesInfo),
    BridgeTechnologies(BridgeTechnologiesInfo),
    Calendars(CalendarsInfo),
    ConfBridgeMenus(ConfBridgeList),
    ConfBridgeProfiles(ConfBridgeList),
    ConfBridgeUsers(ConfBridgeList),
    ChannelTypes(ChannelTypesInfo),
    Images(ImagesInfo),
    SystemInfo(SystemInfo),
    TaskProcessors(TaskProcessorsInfo),
    Version(VersionInfo),
    IaxChannels(IaxChannelsInfo),
    Modules(ModulesInfo),
    SipDialogs(ActiveCount),
    SipSubscriptions(ActiveCount),
    SipChannels(ActiveCount),
    Users(UsersInfo),
}

impl Record {
    /// The family this record was produced for
    pub fn family(&self) -> Family {
        match self {
            Record::Uptime(_) => Family::Uptime,
            Record::Channels(_) => Family::Channels,
            Record::Peers(_) => Family::Peers,
            Record::Threads(_) => Family::Threads,
            Record::Agents(_) => Family::Agents,
            Record::OnlineAgents(_) => Family::OnlineAgents,
            Record::Bridges(_) => Family::Bridges,
            Record::BridgeTechnologies(_) => Family::BridgeTechnologies,
            Record::Calendars(_) => Family::Calendars,
            Record::ConfBridgeMenus(_) => Family::ConfBridgeMenus,
            Record::ConfBridgeProfiles(_) => Family::ConfBridgeProfiles,
            Record::ConfBridgeUsers(_) => Family::ConfBridgeUsers,
            Record::ChannelTypes(_) => Family::ChannelTypes,
            Record::Images(_) => Family::Images,
            Record::SystemInfo(_) => Family::SystemInfo,
            Record::TaskProcessors(_) => Family::TaskProcessors,
            Record::Version(_) => Family::Version,
            Record::IaxChannels(_) => Family::IaxChannels,
            Record::Modules(_) => Family::Modules,
            Record::SipDialogs(_) => Family::SipDialogs,
            Record::SipSubscriptions(_) => Family::SipSubscriptions,
            Record::SipChannels(_) => Family::SipChannels,
            Record::Users(_) => Family::Users,
        }
    }

    /// Whether this record equals its family's sentinel
    pub fn is_unavailable(&self) -> bool {
        match self {
            Record::Uptime(r) => r.is_unavailable(),
            Record::Channels(r) => r.is_unavailable(),
            Record::Peers(r) => r.is_unavailable(),
            Record::Threads(r) => r.is_unavailable(),
            Record::Agents(r) | Record::OnlineAgents(r) => r.is_unavailable(),
            Record::Bridges(r) => r.is_unavailable(),
            Record::BridgeTechnologies(r) => r.is_unavailable(),
            Record::Calendars(r) => r.is_unavailable(),
            Record::ConfBridgeMenus(r)
            | Record::ConfBridgeProfiles(r)
            | Record::ConfBridgeUsers(r) => r.is_unavailable(),
            Record::ChannelTypes(r) => r.is_unavailable(),
            Record::Images(r) => r.is_unavailable(),
            Record::SystemInfo(r) => r.is_unavailable(),
            Record::TaskProcessors(r) => r.is_unavailable(),
            Record::Version(r) => r.is_unavailable(),
            Record::IaxChannels(r) => r.is_unavailable(),
            Record::Modules(r) => r.is_unavailable(),
            Record::SipDialogs(r) | Record::SipSubscriptions(r) | Record::SipChannels(r) => {
                r.is_unavailable()
            }
            Record::Users(r) => r.is_unavailable(),
        }
    }
}
