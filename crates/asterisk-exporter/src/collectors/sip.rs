//! `sip show ...`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::{defaults, Sentinel, SipChannelsInfo};

const PEERS: Desc = Desc::gauge("sip", "peers", "Number of SIP peers");
const MONITORED_ONLINE: Desc =
    Desc::gauge("sip", "monitored_online", "Number of monitored SIP peers online");
const MONITORED_OFFLINE: Desc =
    Desc::gauge("sip", "monitored_offline", "Number of monitored SIP peers offline");
const UNMONITORED_ONLINE: Desc =
    Desc::gauge("sip", "unmonitored_online", "Number of unmonitored SIP peers online");
const UNMONITORED_OFFLINE: Desc =
    Desc::gauge("sip", "unmonitored_offline", "Number of unmonitored SIP peers offline");
const STATUS_UNKNOWN: Desc =
    Desc::gauge("sip", "status_unknown", "Number of SIP peers with UNKNOWN status");
const STATUS_QUALIFIED: Desc =
    Desc::gauge("sip", "status_qualified", "Number of SIP peers with OK status");

const DIALOGS: Desc = Desc::gauge("sip", "active_dialogs", "Number of active SIP dialogs");
const SUBSCRIPTIONS: Desc =
    Desc::gauge("sip", "active_subscriptions", "Number of active SIP subscriptions");
const CHANNELS: Desc = Desc::gauge("sip", "active_channels", "Number of active SIP channels");

const USERS: Desc = Desc::gauge("sip", "users", "Number of SIP users");

/// Peer states, dialog counters and users of the SIP channel driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SipCollector;

fn any_unavailable(info: &SipChannelsInfo) -> bool {
    let missing = defaults::ACTIVE_COUNT.count;
    info.active_sip_dialogs == missing
        || info.active_sip_subscriptions == missing
        || info.active_sip_channels == missing
}

impl Collector for SipCollector {
    fn name(&self) -> &'static str {
        "sip"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let peers = poller.peers();
        out.sample(&PEERS, peers.sip_peers);
        out.sample(&MONITORED_ONLINE, peers.monitored_online);
        out.sample(&MONITORED_OFFLINE, peers.monitored_offline);
        out.sample(&UNMONITORED_ONLINE, peers.unmonitored_online);
        out.sample(&UNMONITORED_OFFLINE, peers.unmonitored_offline);
        out.sample(&STATUS_UNKNOWN, peers.peers_status_unknown);
        out.sample(&STATUS_QUALIFIED, peers.peers_status_qualified);

        let channels = poller.sip_channels();
        out.sample(&DIALOGS, channels.active_sip_dialogs);
        out.sample(&SUBSCRIPTIONS, channels.active_sip_subscriptions);
        out.sample(&CHANNELS, channels.active_sip_channels);

        let users = poller.users();
        out.sample(&USERS, users.users);

        peers.is_unavailable() || any_unavailable(&channels) || users.is_unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::SharedExecutor;
    use asterisk_parser::{MockExecutor, Poller};
    use std::sync::Arc;

    #[test]
    fn test_sip_channel_counters() {
        let executor = MockExecutor::new()
            .with_reply("sip show channels", "Peer  User/ANR  Call ID\n7 active SIP dialogs\n")
            .with_reply("sip show subscriptions", "Peer  User  Call ID\n2 active SIP subscriptions\n")
            .with_reply("sip show channelstats", "Peer  Call ID\n3 active SIP channels\n");
        let poller = Poller::with_tracing(Arc::new(executor) as SharedExecutor);
        let mut out = MetricsWriter::new("asterisk");

        // peers and users are not scripted
        assert!(SipCollector.collect(&poller, &mut out));

        let text = out.finish();
        assert!(text.contains("asterisk_sip_active_dialogs 7\n"));
        assert!(text.contains("asterisk_sip_active_subscriptions 2\n"));
        assert!(text.contains("asterisk_sip_active_channels 3\n"));
        assert!(text.contains("asterisk_sip_peers -1\n"));
        assert!(text.contains("asterisk_sip_users -1\n"));
    }

    #[test]
    fn test_partial_sip_channels_is_unavailable() {
        let info = SipChannelsInfo {
            active_sip_dialogs: 1,
            active_sip_subscriptions: -1,
            active_sip_channels: 0,
        };
        assert!(any_unavailable(&info));
    }
}
