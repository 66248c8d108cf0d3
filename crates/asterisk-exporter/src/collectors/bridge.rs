//! `bridge ...`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const COUNT: Desc = Desc::gauge("bridge", "count", "Number of bridges");
const TECHNOLOGY: Desc = Desc::gauge("bridge", "technology_info", "Bridge technologies info");

/// Bridge count and one info series per bridge technology
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeCollector;

impl Collector for BridgeCollector {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let bridges = poller.bridges();
        let technologies = poller.bridge_technologies();

        out.sample(&COUNT, bridges.count);
        for tech in &technologies.technologies {
            out.labelled(
                &TECHNOLOGY,
                &[
                    ("name", tech.name.as_str()),
                    ("type", tech.kind.as_str()),
                    ("priority", tech.priority.as_str()),
                    ("suspended", tech.suspended.as_str()),
                ],
                1,
            );
        }

        bridges.is_unavailable() || technologies.is_unavailable()
    }
}
