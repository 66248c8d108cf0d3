//! Prometheus text exposition format
//!
//! Samples of one metric family must be written contiguously; the writer
//! emits the `# HELP` and `# TYPE` header the first time a family is seen.

use std::collections::HashSet;
use std::fmt::Write;

/// Content type served on the metrics endpoint
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Prometheus metric type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// A value that can go up and down
    Gauge,
    /// A monotonically increasing value
    Counter,
}

impl MetricKind {
    /// Get the type name as written after `# TYPE`
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// Description of one metric family
#[derive(Debug, Clone, Copy)]
pub struct Desc {
    /// Subsystem between the prefix and the name (e.g. `core`)
    pub subsystem: &'static str,
    /// Metric name within the subsystem
    pub name: &'static str,
    /// Help text
    pub help: &'static str,
    /// Metric type
    pub kind: MetricKind,
}

impl Desc {
    /// A gauge description
    pub const fn gauge(subsystem: &'static str, name: &'static str, help: &'static str) -> Self {
        Self {
            subsystem,
            name,
            help,
            kind: MetricKind::Gauge,
        }
    }

    /// A counter description
    pub const fn counter(subsystem: &'static str, name: &'static str, help: &'static str) -> Self {
        Self {
            subsystem,
            name,
            help,
            kind: MetricKind::Counter,
        }
    }
}

/// Accumulates samples into an exposition document
#[derive(Debug)]
pub struct MetricsWriter {
    prefix: String,
    out: String,
    described: HashSet<String>,
}

impl MetricsWriter {
    /// Create a writer naming every metric `<prefix>_<subsystem>_<name>`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            out: String::new(),
            described: HashSet::new(),
        }
    }

    /// Fully-qualified name of a metric
    pub fn full_name(&self, desc: &Desc) -> String {
        [self.prefix.as_str(), desc.subsystem, desc.name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Write an unlabelled sample
    pub fn sample(&mut self, desc: &Desc, value: i64) {
        self.labelled(desc, &[], value);
    }

    /// Write a sample with label pairs
    pub fn labelled(&mut self, desc: &Desc, labels: &[(&str, &str)], value: i64) {
        let name = self.full_name(desc);
        if self.described.insert(name.clone()) {
            let _ = writeln!(self.out, "# HELP {} {}", name, escape_help(desc.help));
            let _ = writeln!(self.out, "# TYPE {} {}", name, desc.kind.as_str());
        }

        self.out.push_str(&name);
        if !labels.is_empty() {
            self.out.push('{');
            for (i, (key, value)) in labels.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                let _ = write!(self.out, "{}=\"{}\"", key, escape_label(value));
            }
            self.out.push('}');
        }
        let _ = writeln!(self.out, " {}", value);
    }

    /// The document written so far
    pub fn finish(self) -> String {
        self.out
    }
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
