use super::*;

impl App {
    fn push_status(&mut self, level: StatusLevel, text: String) {
        self.status_seq += 1;
        let clear_at = match level {
            StatusLevel::Info => None,
            StatusLevel::Warning | StatusLevel::Error => Some(Instant::now() + STATUS_CLEAR_AFTER),
        };
        self.status = Some(StatusLine {
            seq: self.status_seq,
            level,
            text,
            clear_at,
        });
    }

    pub(in crate::tui_shell) fn push_info(&mut self, msg: impl Into<String>) {
        self.push_status(StatusLevel::Info, msg.into());
    }

    pub(in crate::tui_shell) fn push_warning(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        warn!("{msg}");
        self.push_status(StatusLevel::Warning, msg);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        warn!(error = %msg, "dashboard error");
        self.push_status(StatusLevel::Error, msg);
    }

    /// Clears the status line only if it is still message `seq`.
    pub(super) fn clear_status(&mut self, seq: u64) {
        if self.status.as_ref().is_some_and(|s| s.seq == seq) {
            self.status = None;
        }
    }

    pub(super) fn expire_status(&mut self, now: Instant) {
        let due = self
            .status
            .as_ref()
            .filter(|s| s.clear_at.is_some_and(|at| at <= now))
            .map(|s| s.seq);
        if let Some(seq) = due {
            self.clear_status(seq);
        }
    }

    pub(in crate::tui_shell) fn status_text(&self) -> Option<(StatusLevel, &str)> {
        self.status.as_ref().map(|s| (s.level, s.text.as_str()))
    }

    pub(super) fn open_confirm(&mut self, action: PendingAction) {
        let message = match &action {
            PendingAction::DismissGroup { ids, kind, .. } => format!(
                "Dismiss {} notifications in this {}?",
                ids.len(),
                kind.tag()
            ),
        };
        debug!(%message, "confirmation requested");
        self.modal = Some(Modal::Confirm { message, action });
    }

    pub(super) fn open_command_line(&mut self) {
        let input = Input {
            history: self.command_history.clone(),
            ..Input::default()
        };
        self.modal = Some(Modal::CommandLine {
            input,
            suggestions: Vec::new(),
            selected: 0,
        });
        self.recompute_suggestions();
    }

    pub(in crate::tui_shell) fn remember_command(&mut self, line: &str) {
        let mut input = Input {
            history: std::mem::take(&mut self.command_history),
            ..Input::default()
        };
        input.push_history(line);
        self.command_history = input.history;
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
