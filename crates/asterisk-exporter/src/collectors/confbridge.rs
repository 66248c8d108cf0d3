//! `confbridge show ...`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::{ConfBridgeList, Sentinel};

const MENU: Desc = Desc::gauge("confbridge", "menu", "Configured ConfBridge menus");
const BRIDGE_PROFILE: Desc =
    Desc::gauge("confbridge", "bridge_profile", "Configured ConfBridge bridge profiles");
const USER_PROFILE: Desc =
    Desc::gauge("confbridge", "user_profile", "Configured ConfBridge user profiles");

/// One info series per menu, bridge profile and user profile
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfBridgeCollector;

fn write_list(out: &mut MetricsWriter, desc: &Desc, label: &str, list: &ConfBridgeList) {
    for entry in list.entries.iter().filter(|e| !e.trim().is_empty()) {
        out.labelled(desc, &[(label, entry.trim())], 1);
    }
}

impl Collector for ConfBridgeCollector {
    fn name(&self) -> &'static str {
        "confbridge"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let info = poller.conf_bridge();

        write_list(out, &MENU, "menu", &info.menus);
        write_list(out, &BRIDGE_PROFILE, "profile", &info.profiles);
        write_list(out, &USER_PROFILE, "profile", &info.users);

        info.menus.is_unavailable() || info.profiles.is_unavailable() || info.users.is_unavailable()
    }
}
