use super::*;

#[derive(Clone, Copy, Debug)]
pub(in crate::tui_shell) struct CommandDef {
    pub(in crate::tui_shell) name: &'static str,
    pub(in crate::tui_shell) aliases: &'static [&'static str],
    pub(in crate::tui_shell) usage: &'static str,
    pub(in crate::tui_shell) help: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusLine {
    pub(in crate::tui_shell) seq: u64,
    pub(in crate::tui_shell) level: StatusLevel,
    pub(in crate::tui_shell) text: String,
    pub(in crate::tui_shell) clear_at: Option<Instant>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) struct JumpTarget {
    pub(in crate::tui_shell) session: String,
    pub(in crate::tui_shell) window: String,
    pub(in crate::tui_shell) pane: String,
}

/// Completion message from a background job.
#[derive(Debug)]
pub(in crate::tui_shell) enum JobResult {
    Jump {
        generation: u64,
        target: JumpTarget,
        notification_id: Option<u64>,
        /// `session:window` display names, resolved off the UI thread.
        label: String,
        outcome: Result<(), String>,
    },
}
