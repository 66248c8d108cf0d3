//! Default record table
//!
//! One immutable sentinel per record type. A sentinel means "value
//! unavailable": integer fields are `-1`, strings are empty, lists are empty.
//! The table is made of `const` items so nothing can mutate it at runtime.

use crate::records::*;

/// Sentinel for [`UptimeInfo`]
pub const UPTIME: UptimeInfo = UptimeInfo {
    system_uptime_seconds: -1,
    last_reload_seconds: -1,
};

/// Sentinel for [`ChannelsInfo`]
pub const CHANNELS: ChannelsInfo = ChannelsInfo {
    active_channels: -1,
    active_calls: -1,
    processed_calls: -1,
};

/// Sentinel for [`PeersInfo`]
pub const PEERS: PeersInfo = PeersInfo {
    sip_peers: -1,
    monitored_online: -1,
    monitored_offline: -1,
    unmonitored_online: -1,
    unmonitored_offline: -1,
    peers_status_unknown: -1,
    peers_status_qualified: -1,
};

/// Sentinel for [`ThreadsInfo`]
pub const THREADS: ThreadsInfo = ThreadsInfo { thread_count: -1 };

/// Sentinel for [`AgentsInfo`]
pub const AGENTS: AgentsInfo = AgentsInfo {
    defined_agents: -1,
    logged_agents: -1,
    talking_agents: -1,
};

/// Sentinel for [`BridgesInfo`]
pub const BRIDGES: BridgesInfo = BridgesInfo { count: -1 };

/// Sentinel for [`BridgeTechnologiesInfo`]
pub const BRIDGE_TECHNOLOGIES: BridgeTechnologiesInfo = BridgeTechnologiesInfo {
    technologies: Vec::new(),
};

/// Sentinel for [`CalendarsInfo`]
pub const CALENDARS: CalendarsInfo = CalendarsInfo { count: -1 };

/// Sentinel for [`ConfBridgeList`]
pub const CONF_BRIDGE_LIST: ConfBridgeList = ConfBridgeList {
    entries: Vec::new(),
};

/// Sentinel for [`ChannelTypesInfo`]
pub const CHANNEL_TYPES: ChannelTypesInfo = ChannelTypesInfo {
    channel_types: Vec::new(),
};

/// Sentinel for [`ImagesInfo`]
pub const IMAGES: ImagesInfo = ImagesInfo { registered: -1 };

/// Sentinel for [`SystemInfo`]
pub const SYSTEM: SystemInfo = SystemInfo {
    total_memory: -1,
    free_memory: -1,
    buffer_memory: -1,
    total_swap: -1,
    free_swap: -1,
    process_count: -1,
};

/// Sentinel for [`TaskProcessorsInfo`]
pub const TASK_PROCESSORS: TaskProcessorsInfo = TaskProcessorsInfo {
    processor_count: -1,
    processed_tasks_total: -1,
    in_queue: -1,
};

/// Sentinel for [`VersionInfo`]
pub const VERSION: VersionInfo = VersionInfo {
    version: String::new(),
};

/// Sentinel for [`IaxChannelsInfo`]
pub const IAX_CHANNELS: IaxChannelsInfo = IaxChannelsInfo { active_count: -1 };

/// Sentinel for [`ModulesInfo`]
pub const MODULES: ModulesInfo = ModulesInfo { module_count: -1 };

/// Sentinel for [`ActiveCount`]
pub const ACTIVE_COUNT: ActiveCount = ActiveCount { count: -1 };

/// Sentinel for [`UsersInfo`]
pub const USERS: UsersInfo = UsersInfo { users: -1 };

/// Ties a record type to its row in the default table.
pub trait Sentinel: Sized + PartialEq {
    /// The "value unavailable" record
    fn unavailable() -> Self;

    /// Whether this record equals the sentinel
    fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }
}

macro_rules! sentinel {
    ($($ty:ty => $value:expr),* $(,)?) => {
        $(
            impl Sentinel for $ty {
                fn unavailable() -> Self {
                    $value
                }
            }
        )*
    };
}

sentinel! {
    UptimeInfo => UPTIME,
    ChannelsInfo => CHANNELS,
    PeersInfo => PEERS,
    ThreadsInfo => THREADS,
    AgentsInfo => AGENTS,
    BridgesInfo => BRIDGES,
    BridgeTechnologiesInfo => BRIDGE_TECHNOLOGIES,
    CalendarsInfo => CALENDARS,
    ConfBridgeList => CONF_BRIDGE_LIST,
    ChannelTypesInfo => CHANNEL_TYPES,
    ImagesInfo => IMAGES,
    SystemInfo => SYSTEM,
    TaskProcessorsInfo => TASK_PROCESSORS,
    VersionInfo => VERSION,
    IaxChannelsInfo => IAX_CHANNELS,
    ModulesInfo => MODULES,
    ActiveCount => ACTIVE_COUNT,
    UsersInfo => USERS,
}
