use super::*;

/// Destructive action waiting on a yes/no answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingAction {
    DismissGroup {
        session: String,
        window: String,
        pane: String,
        /// Members of the group as shown when the prompt opened.
        ids: Vec<u64>,
        kind: NodeKind,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) enum Modal {
    Confirm {
        message: String,
        action: PendingAction,
    },
    CommandLine {
        input: Input,
        suggestions: Vec<CommandDef>,
        selected: usize,
    },
}
