//! Error sinks
//!
//! - `TracingSink`: forwards events to `tracing`, used in production
//! - `MemorySink`: keeps events in memory for assertions in tests

use asterisk_domain::{ErrorSink, Severity};
use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

/// Render fields as `key=value` pairs separated by spaces
///
/// Values containing whitespace or quotes are debug-quoted.
pub fn render_fields(fields: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let value = value.to_string();
        if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"') {
            let _ = write!(out, "{}={:?}", key, value);
        } else {
            let _ = write!(out, "{}={}", key, value);
        }
    }
    out
}

/// Forwards sink events to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log(&self, severity: Severity, fields: &[(&str, &dyn fmt::Display)]) {
        let rendered = render_fields(fields);
        match severity {
            Severity::Debug => debug!(target: "asterisk_parser", "{}", rendered),
            Severity::Info => info!(target: "asterisk_parser", "{}", rendered),
            Severity::Warn => warn!(target: "asterisk_parser", "{}", rendered),
            Severity::Error => error!(target: "asterisk_parser", "{}", rendered),
        }
    }
}

/// One event captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEvent {
    /// Event severity
    pub severity: Severity,
    /// Fields rendered with `Display`, in call order
    pub fields: Vec<(String, String)>,
}

impl SinkEvent {
    /// Value of the first field named `key`
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Sink that stores every event in memory
///
/// Clones share the same event buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of events recorded so far
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl ErrorSink for MemorySink {
    fn log(&self, severity: Severity, fields: &[(&str, &dyn fmt::Display)]) {
        let event = SinkEvent {
            severity,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
