use std::process::Command;

use tracing::trace;

use crate::error::TmuxError;

/// Runs one tmux command and returns its stdout.
pub trait TmuxClient: Send + Sync {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;
}

/// Shells out to the `tmux` binary on `PATH`.
#[derive(Clone, Debug, Default)]
pub struct CommandClient;

impl TmuxClient for CommandClient {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        trace!(?args, "tmux");
        let output = Command::new("tmux").args(args).output()?;
        if !output.status.success() {
            return Err(TmuxError::Command {
                command: args.first().copied().unwrap_or_default().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
