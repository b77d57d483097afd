use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("notification {0} not found")]
    NotFound(u64),

    #[error("invalid notification id {0:?}")]
    InvalidId(String),

    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl StorageError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Rejected user input. State is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid group-by value: {0} (expected one of: none, session, window, pane, pane_message)")]
    GroupBy(String),

    #[error("invalid expand-level value: {value} (expected {min}-{max})")]
    ExpandLevel { value: String, min: u8, max: u8 },

    #[error("invalid read filter: {0} (expected one of: all, read, unread)")]
    ReadFilter(String),

    #[error("invalid tab: {0} (expected recents or all)")]
    Tab(String),

    #[error("invalid view mode: {0} (expected one of: compact, detailed, grouped, search)")]
    ViewMode(String),
}

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux is not running")]
    NotRunning,

    #[error("failed to run tmux: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("tmux {command} failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("jump target needs both a session and a window")]
    MissingTarget,
}
