//! Runs console commands through the Asterisk binary

use asterisk_domain::{CommandExecutor, ExecutionError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executes `<asterisk> -rx '<command>'` against the local switch
///
/// Each call spawns one process and blocks until it exits.
#[derive(Debug, Clone)]
pub struct AsteriskCli {
    path: PathBuf,
}

impl AsteriskCli {
    /// Create an executor for the binary at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the Asterisk binary
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CommandExecutor for AsteriskCli {
    fn run(&self, command: &str) -> Result<String, ExecutionError> {
        let output = Command::new(&self.path)
            .arg("-rx")
            .arg(command)
            .output()
            .map_err(|e| ExecutionError::new(format!("{}: {}", self.path.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExecutionError::new(format!(
                "{} -rx {:?} {}: {}",
                self.path.display(),
                command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
