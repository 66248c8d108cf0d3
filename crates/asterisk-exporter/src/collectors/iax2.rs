//! `iax2 show channels`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const ACTIVE: Desc = Desc::gauge("iax2", "active_channels", "Number of active IAX channels");

/// Active IAX2 channels
#[derive(Debug, Clone, Copy, Default)]
pub struct Iax2Collector;

impl Collector for Iax2Collector {
    fn name(&self) -> &'static str {
        "iax2"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let channels = poller.iax_channels();
        out.sample(&ACTIVE, channels.active_count);
        channels.is_unavailable()
    }
}
