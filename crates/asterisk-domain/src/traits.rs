//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the parsing engine and
//! infrastructure. Implementations live in other crates.

use std::fmt;
use std::sync::Arc;

/// Failure to run a console command
///
/// Opaque to the parsers: they only distinguish "present" from "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    message: String,
}

impl ExecutionError {
    /// Create an execution error with a human-readable message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command execution failed: {}", self.message)
    }
}

impl std::error::Error for ExecutionError {}

/// Runs console commands against the switch
///
/// Implemented by the infrastructure layer (the exporter's process runner)
pub trait CommandExecutor {
    /// Run a command and return its raw reply
    fn run(&self, command: &str) -> Result<String, ExecutionError>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn run(&self, command: &str) -> Result<String, ExecutionError> {
        (**self).run(command)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
    fn run(&self, command: &str) -> Result<String, ExecutionError> {
        (**self).run(command)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Arc<T> {
    fn run(&self, command: &str) -> Result<String, ExecutionError> {
        (**self).run(command)
    }
}

/// Severity of a structured log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Unexpected but harmless
    Warn,
    /// A value could not be produced
    Error,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Receives structured events for recoverable parse anomalies
///
/// Fields are ordered key/value pairs such as `err`, `line`, `value`, `cmd`.
/// Implementations must not panic and should not block meaningfully.
pub trait ErrorSink {
    /// Record one event
    fn log(&self, severity: Severity, fields: &[(&str, &dyn fmt::Display)]);
}

impl<T: ErrorSink + ?Sized> ErrorSink for &T {
    fn log(&self, severity: Severity, fields: &[(&str, &dyn fmt::Display)]) {
        (**self).log(severity, fields)
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for Arc<T> {
    fn log(&self, severity: Severity, fields: &[(&str, &dyn fmt::Display)]) {
        (**self).log(severity, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CommandExecutor for Echo {
        fn run(&self, command: &str) -> Result<String, ExecutionError> {
            if command.is_empty() {
                return Err(ExecutionError::new("empty command"));
            }
            Ok(command.to_string())
        }
    }

    #[test]
    fn test_execution_error_display() {
        let err = ExecutionError::new("exit status 1");
        assert_eq!(err.message(), "exit status 1");
        assert_eq!(err.to_string(), "command execution failed: exit status 1");
    }

    #[test]
    fn test_executor_forwarding() {
        let boxed: Box<dyn CommandExecutor> = Box::new(Echo);
        assert_eq!(boxed.run("module show").unwrap(), "module show");

        let shared = Arc::new(Echo);
        assert!(shared.run("").is_err());
        assert_eq!((&Echo).run("x").unwrap(), "x");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warn);
        assert_eq!(Severity::Info.as_str(), "info");
    }
}
