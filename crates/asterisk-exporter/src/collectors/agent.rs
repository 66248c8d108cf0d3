//! `agent show ...`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const DEFINED: Desc = Desc::gauge("agents", "defined", "Number of defined agents");
const LOGGED: Desc = Desc::gauge("agents", "logged", "Number of logged agents");
const TALKING: Desc = Desc::gauge("agents", "talking", "Number of talking agents");
const ONLINE_DEFINED: Desc =
    Desc::gauge("agents", "online_defined", "Number of defined online agents");
const ONLINE_LOGGED: Desc =
    Desc::gauge("agents", "online_logged", "Number of logged online agents");
const ONLINE_TALKING: Desc =
    Desc::gauge("agents", "online_talking", "Number of talking online agents");

/// Agent pool totals, for all agents and for online agents
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentsCollector;

impl Collector for AgentsCollector {
    fn name(&self) -> &'static str {
        "agents"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let all = poller.agents();
        let online = poller.online_agents();

        out.sample(&DEFINED, all.defined_agents);
        out.sample(&LOGGED, all.logged_agents);
        out.sample(&TALKING, all.talking_agents);
        out.sample(&ONLINE_DEFINED, online.defined_agents);
        out.sample(&ONLINE_LOGGED, online.logged_agents);
        out.sample(&ONLINE_TALKING, online.talking_agents);

        all.is_unavailable() || online.is_unavailable()
    }
}
