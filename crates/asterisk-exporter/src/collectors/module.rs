//! `module show`

use super::{AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const COUNT: Desc = Desc::gauge("module", "count", "Number of loaded modules");

/// Loaded module count
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleCollector;

impl Collector for ModuleCollector {
    fn name(&self) -> &'static str {
        "module"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let modules = poller.modules();
        out.sample(&COUNT, modules.module_count);
        modules.is_unavailable()
    }
}
