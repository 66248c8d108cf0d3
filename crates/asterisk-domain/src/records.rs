//! Records module - typed results of console commands
//!
//! Every record is a flat value object. Integer fields use `-1` to mean
//! "unavailable" (see [`crate::defaults`]), so a legitimate zero is never
//! confused with a failed read.

/// Uptime and reload age (`core show uptime seconds`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UptimeInfo {
    /// Seconds since the switch started
    pub system_uptime_seconds: i64,

    /// Seconds since the last configuration reload
    pub last_reload_seconds: i64,
}

/// Channel and call counters (`core show channels count`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelsInfo {
    /// Currently active channels
    pub active_channels: i64,

    /// Currently active calls
    pub active_calls: i64,

    /// Calls processed since startup
    pub processed_calls: i64,
}

/// SIP peer summary (`sip show peers`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeersInfo {
    /// Total number of SIP peers
    pub sip_peers: i64,

    /// Monitored peers currently online
    pub monitored_online: i64,

    /// Monitored peers currently offline
    pub monitored_offline: i64,

    /// Unmonitored peers currently online
    pub unmonitored_online: i64,

    /// Unmonitored peers currently offline
    pub unmonitored_offline: i64,

    /// Peer rows whose status is `UNKNOWN`
    pub peers_status_unknown: i64,

    /// Peer rows whose status is `OK`
    pub peers_status_qualified: i64,
}

/// Thread count (`core show threads`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThreadsInfo {
    /// Number of threads listed
    pub thread_count: i64,
}

/// Agent summary (`agent show all` and `agent show online`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentsInfo {
    /// Defined agents
    pub defined_agents: i64,

    /// Logged-in agents
    pub logged_agents: i64,

    /// Agents currently talking
    pub talking_agents: i64,
}

/// Bridge count (`bridge show all`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BridgesInfo {
    /// Number of bridges listed
    pub count: i64,
}

/// One row of `bridge technology show`, kept as raw column text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BridgeTechnology {
    /// Technology name (e.g. `softmix`)
    pub name: String,

    /// Technology type (e.g. `MultiMix`)
    pub kind: String,

    /// Priority column, as printed
    pub priority: String,

    /// Suspended column, as printed (`Yes`/`No`)
    pub suspended: String,
}

/// Registered bridge technologies (`bridge technology show`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BridgeTechnologiesInfo {
    /// One entry per data row, in row order
    pub technologies: Vec<BridgeTechnology>,
}

/// Calendar count (`calendar show calendars`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarsInfo {
    /// Number of calendars listed
    pub count: i64,
}

/// Lines listed by one of the `confbridge show ...` commands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfBridgeList {
    /// Entries in the order the console printed them
    pub entries: Vec<String>,
}

/// Menus and profiles known to the conference bridge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfBridgeInfo {
    /// `confbridge show menus`
    pub menus: ConfBridgeList,

    /// `confbridge show profile bridges`
    pub profiles: ConfBridgeList,

    /// `confbridge show profile users`
    pub users: ConfBridgeList,
}

/// Capabilities of one channel driver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelType {
    /// Driver name (first column)
    pub name: String,

    /// Supports device state
    pub device_state: bool,

    /// Supports indications
    pub indications: bool,

    /// Supports transfer
    pub transfer: bool,
}

/// Registered channel drivers (`core show channeltypes`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelTypesInfo {
    /// One entry per driver row
    pub channel_types: Vec<ChannelType>,
}

/// Image format count (`core show image formats`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImagesInfo {
    /// Number of registered image formats
    pub registered: i64,
}

/// Host statistics (`core show sysinfo`)
///
/// Memory and swap values are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemInfo {
    /// Total RAM
    pub total_memory: i64,

    /// Free RAM
    pub free_memory: i64,

    /// Buffer RAM
    pub buffer_memory: i64,

    /// Total swap space
    pub total_swap: i64,

    /// Free swap space
    pub free_swap: i64,

    /// Number of host processes
    pub process_count: i64,
}

/// Task processor totals (`core show taskprocessors`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TaskProcessorsInfo {
    /// Number of task processor rows
    pub processor_count: i64,

    /// Sum of the `Processed` column
    pub processed_tasks_total: i64,

    /// Sum of the `In Queue` column
    pub in_queue: i64,
}

/// Version banner (`core show version`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VersionInfo {
    /// Banner text as printed
    pub version: String,
}

/// IAX2 channel count (`iax2 show channels`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IaxChannelsInfo {
    /// Active IAX channels
    pub active_count: i64,
}

/// Loaded module count (`module show`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModulesInfo {
    /// Number of loaded modules
    pub module_count: i64,
}

/// A single counter read from a summary line such as `7 active SIP dialogs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveCount {
    /// The leading integer of the summary line
    pub count: i64,
}

/// SIP dialog, subscription and channel counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SipChannelsInfo {
    /// `sip show channels`
    pub active_sip_dialogs: i64,

    /// `sip show subscriptions`
    pub active_sip_subscriptions: i64,

    /// `sip show channelstats`
    pub active_sip_channels: i64,
}

/// SIP user count (`sip show users`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UsersInfo {
    /// Number of users listed
    pub users: i64,
}
