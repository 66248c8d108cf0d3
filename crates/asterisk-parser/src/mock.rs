//! Scripted executor for tests

use asterisk_domain::{CommandExecutor, ExecutionError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Executor that answers from a table of canned replies
///
/// Commands without a scripted reply fail with an [`ExecutionError`]. Clones
/// share the reply table and the call log.
///
/// # Examples
///
/// ```
/// use asterisk_domain::CommandExecutor;
/// use asterisk_parser::MockExecutor;
///
/// let executor = MockExecutor::default()
///     .with_reply("core show version", "Asterisk 18.0.0\n")
///     .with_failure("sip show peers", "Unable to connect to remote asterisk");
///
/// assert_eq!(executor.run("core show version").unwrap(), "Asterisk 18.0.0\n");
/// assert!(executor.run("sip show peers").is_err());
/// assert!(executor.run("module show").is_err());
/// assert_eq!(executor.call_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockExecutor {
    replies: Arc<Mutex<HashMap<String, Result<String, ExecutionError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockExecutor {
    /// Create an executor with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_reply`](Self::add_reply)
    pub fn with_reply(self, command: impl Into<String>, reply: impl Into<String>) -> Self {
        self.add_reply(command, reply);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure)
    pub fn with_failure(self, command: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_failure(command, message);
        self
    }

    /// Script a successful reply for `command`
    pub fn add_reply(&self, command: impl Into<String>, reply: impl Into<String>) {
        self.script(command.into(), Ok(reply.into()));
    }

    /// Script a failure for `command`
    pub fn add_failure(&self, command: impl Into<String>, message: impl Into<String>) {
        self.script(command.into(), Err(ExecutionError::new(message)));
    }

    fn script(&self, command: String, reply: Result<String, ExecutionError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.insert(command, reply);
        }
    }

    /// Number of commands run so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Forget the recorded calls
    pub fn reset_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl CommandExecutor for MockExecutor {
    fn run(&self, command: &str) -> Result<String, ExecutionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }

        let replies = self
            .replies
            .lock()
            .map_err(|_| ExecutionError::new("mock reply table poisoned"))?;
        match replies.get(command) {
            Some(reply) => reply.clone(),
            None => Err(ExecutionError::new(format!("no reply scripted for {command:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reply() {
        let executor = MockExecutor::new().with_reply("module show", "6 modules loaded");
        assert_eq!(executor.run("module show").unwrap(), "6 modules loaded");
        assert_eq!(executor.calls(), vec!["module show"]);
    }

    #[test]
    fn test_unscripted_command_fails() {
        let executor = MockExecutor::new();
        let err = executor.run("core show threads").unwrap_err();
        assert!(err.message().contains("core show threads"));
    }

    #[test]
    fn test_later_script_replaces_earlier() {
        let executor = MockExecutor::new().with_reply("core show version", "old");
        executor.add_failure("core show version", "gone");
        assert_eq!(
            executor.run("core show version").unwrap_err().message(),
            "gone"
        );
    }

    #[test]
    fn test_clones_share_state() {
        let executor = MockExecutor::new();
        let clone = executor.clone();
        clone.add_reply("bridge show all", "Bridge-ID");
        clone.run("bridge show all").unwrap();

        assert_eq!(executor.call_count(), 1);
        assert!(executor.run("bridge show all").is_ok());

        executor.reset_calls();
        assert_eq!(clone.call_count(), 0);
    }
}
