//! `calendar show calendars`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const COUNT: Desc = Desc::gauge("calendar", "count", "Number of calendars");

/// Number of configured calendars
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarCollector;

impl Collector for CalendarCollector {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let calendars = poller.calendars();
        out.sample(&COUNT, calendars.count);
        calendars.is_unavailable()
    }
}
