//! Metric collectors
//!
//! Each collector reads a group of console families through the shared
//! [`AsteriskPoller`] and writes their values as metrics. A collector reports
//! an error for a scrape when any record it read is the family's sentinel;
//! the registry turns that into the `exporter_collector_error` gauge.

mod agent;
mod bridge;
mod calendar;
mod confbridge;
mod core_show;
mod iax2;
mod module;
mod sip;

pub use agent::AgentsCollector;
pub use bridge::BridgeCollector;
pub use calendar::CalendarCollector;
pub use confbridge::ConfBridgeCollector;
pub use core_show::CoreCollector;
pub use iax2::Iax2Collector;
pub use module::ModuleCollector;
pub use sip::SipCollector;

use crate::config::CollectorsConfig;
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::CommandExecutor;
use asterisk_parser::Poller;
use std::sync::Arc;
use tracing::debug;

/// Executor shared between scrapes
pub type SharedExecutor = Arc<dyn CommandExecutor + Send + Sync>;

/// Poller used by every collector
pub type AsteriskPoller = Poller<SharedExecutor>;

const COLLECTOR_ERROR: Desc = Desc::gauge(
    "exporter",
    "collector_error",
    "Collector errors. 0 = no error, 1 = error occurred",
);

/// A group of metrics read together
pub trait Collector: Send + Sync {
    /// Name used in the `collector` label
    fn name(&self) -> &'static str;

    /// Read the families and write their metrics
    ///
    /// Returns `true` when any record read was unavailable.
    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool;
}

/// The enabled collectors, in scrape order
pub struct CollectorRegistry {
    prefix: String,
    collectors: Vec<Box<dyn Collector>>,
}

impl CollectorRegistry {
    /// Create an empty registry
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            collectors: Vec::new(),
        }
    }

    /// Register the collectors switched on in `config`
    pub fn from_config(prefix: impl Into<String>, config: &CollectorsConfig) -> Self {
        let mut registry = Self::new(prefix);
        let table: [(bool, Box<dyn Collector>); 8] = [
            (config.agents, Box::new(AgentsCollector)),
            (config.core, Box::new(CoreCollector)),
            (config.bridge, Box::new(BridgeCollector)),
            (config.calendar, Box::new(CalendarCollector)),
            (config.confbridge, Box::new(ConfBridgeCollector)),
            (config.iax2, Box::new(Iax2Collector)),
            (config.module, Box::new(ModuleCollector)),
            (config.sip, Box::new(SipCollector)),
        ];

        for (enabled, collector) in table {
            if enabled {
                registry.register(collector);
            }
        }
        registry
    }

    /// Add a collector
    pub fn register(&mut self, collector: Box<dyn Collector>) {
        debug!("collector registered: {}", collector.name());
        self.collectors.push(collector);
    }

    /// Names of the registered collectors
    pub fn names(&self) -> Vec<&'static str> {
        self.collectors.iter().map(|c| c.name()).collect()
    }

    /// Run every collector and render one exposition document
    ///
    /// Blocks for as long as the console commands take.
    pub fn scrape(&self, poller: &AsteriskPoller) -> String {
        let mut out = MetricsWriter::new(&self.prefix);
        let mut errors = Vec::with_capacity(self.collectors.len());

        for collector in &self.collectors {
            debug!("collecting {} metrics", collector.name());
            let failed = collector.collect(poller, &mut out);
            if failed {
                debug!("collector {} read unavailable values", collector.name());
            }
            errors.push((collector.name(), failed));
        }

        for (name, failed) in errors {
            out.labelled(&COLLECTOR_ERROR, &[("collector", name)], i64::from(failed));
        }
        out.finish()
    }
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}
