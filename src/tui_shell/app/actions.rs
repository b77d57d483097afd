use super::*;

impl App {
    pub(in crate::tui_shell) fn save_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.clone() else {
            return true;
        };
        match self.settings.save(&path) {
            Ok(()) => true,
            Err(err) => {
                self.push_warning(format!("Failed to save settings: {err}"));
                false
            }
        }
    }

    pub(in crate::tui_shell) fn quit_with_save(&mut self) {
        self.save_settings();
        info!("leaving dashboard");
        self.quit = true;
    }

    pub(super) fn quit_without_save(&mut self) {
        self.quit = true;
    }

    pub(super) fn dismiss_selected(&mut self) {
        let Some(id) = self.selected_notification().map(|n| n.id) else {
            return;
        };
        if let Err(err) = self.store.dismiss(id) {
            self.push_error(format!("Failed to dismiss notification: {err}"));
            return;
        }
        // The row is gone; keep the cursor index and let it clamp.
        let cursor = self.cursor();
        if self.reload(true) {
            self.set_cursor_index(cursor);
        }
    }

    fn set_cursor_index(&mut self, index: usize) {
        if self.is_grouped_view() {
            self.fold.set_cursor(index);
        } else {
            self.list_cursor = index.min(self.filtered.len().saturating_sub(1));
        }
    }

    pub(super) fn mark_selected_read(&mut self) {
        self.mark_selected(true);
    }

    pub(super) fn mark_selected_unread(&mut self) {
        self.mark_selected(false);
    }

    fn mark_selected(&mut self, read: bool) {
        let Some(id) = self.selected_notification().map(|n| n.id) else {
            return;
        };
        let res = if read {
            self.store.mark_read(id)
        } else {
            self.store.mark_unread(id)
        };
        if let Err(err) = res {
            let what = if read { "read" } else { "unread" };
            self.push_error(format!("Failed to mark notification {what}: {err}"));
            return;
        }
        self.reload(true);
    }

    /// `D`: asks before dismissing everything under the selected session,
    /// window or pane. Only the notifications the group currently shows are
    /// captured; hidden ones and look-alike scopes are left alone.
    pub(super) fn start_dismiss_group(&mut self) {
        if !self.is_grouped_view() {
            return;
        }
        let Some(row) = self.fold.selected_row() else {
            return;
        };
        let Some(tree) = self.fold.tree() else {
            return;
        };
        let Some(node) = tree.node(&row.path) else {
            return;
        };
        if !matches!(
            node.kind,
            NodeKind::Session | NodeKind::Window | NodeKind::Pane
        ) || node.count == 0
        {
            return;
        }
        let kind = node.kind;

        let (mut session, mut window, mut pane) = (None, None, None);
        for depth in 1..=row.path.len() {
            let Some(n) = tree.node(&row.path[..depth]) else {
                continue;
            };
            match n.kind {
                NodeKind::Session => session = Some(n.title.clone()),
                NodeKind::Window => window = Some(n.title.clone()),
                NodeKind::Pane => pane = Some(n.title.clone()),
                NodeKind::Root | NodeKind::Message | NodeKind::Notification => {}
            }
        }

        // An empty title is a real group of its own, so every part that
        // exists on the path must match exactly.
        let ids: Vec<u64> = self
            .filtered
            .iter()
            .filter(|n| {
                session.as_ref().is_none_or(|s| &n.session == s)
                    && window.as_ref().is_none_or(|w| &n.window == w)
                    && pane.as_ref().is_none_or(|p| &n.pane == p)
            })
            .map(|n| n.id)
            .collect();
        if ids.is_empty() {
            return;
        }

        let action = PendingAction::DismissGroup {
            session: session.unwrap_or_default(),
            window: window.unwrap_or_default(),
            pane: pane.unwrap_or_default(),
            ids,
            kind,
        };
        self.open_confirm(action);
    }

    pub(in crate::tui_shell) fn execute_confirmed(&mut self, action: PendingAction) {
        match action {
            PendingAction::DismissGroup { ids, .. } => {
                let dismissed = match self.store.dismiss_ids(&ids) {
                    Ok(n) => n,
                    Err(err) => {
                        self.push_error(format!("Failed to dismiss notifications: {err}"));
                        return;
                    }
                };
                let cursor = self.cursor();
                if self.reload(true) {
                    self.set_cursor_index(cursor);
                    self.push_info(format!("Dismissed {dismissed} notifications"));
                }
            }
        }
    }

    /// compact -> detailed -> grouped -> search. Search input follows the
    /// search view.
    pub(in crate::tui_shell) fn cycle_view_mode(&mut self) {
        let next = self.settings.view_mode.next();
        self.set_view_mode(next);
        self.push_info(format!("View mode: {next}"));
    }

    pub(super) fn set_view_mode(&mut self, mode: ViewMode) {
        let was_search = self.settings.view_mode == ViewMode::Search;
        self.settings.view_mode = mode;
        if mode == ViewMode::Search {
            self.search_mode = true;
        } else if was_search {
            self.search_mode = false;
        }
        self.apply_filters(false);
        self.save_settings();
    }

    pub(super) fn switch_tab(&mut self, tab: Tab) {
        if self.settings.active_tab == tab {
            return;
        }
        self.settings.active_tab = tab;
        self.apply_filters(false);
        self.save_settings();
    }

    pub(super) fn enter_search(&mut self) {
        self.search_mode = true;
    }

    /// Leaves search input. `clear` drops the query as well.
    pub(super) fn exit_search(&mut self, clear: bool) {
        self.search_mode = false;
        if clear {
            self.search.clear();
        }
        self.apply_filters(false);
    }

    pub(super) fn search_insert(&mut self, c: char) {
        self.search.insert_char(c);
        self.apply_filters(false);
    }

    pub(super) fn search_backspace(&mut self) {
        if self.search.buf.is_empty() {
            return;
        }
        self.search.backspace();
        self.apply_filters(false);
    }

    pub(super) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(super) fn toggle_fold(&mut self) {
        if !self.is_grouped_view() {
            return;
        }
        let level = self.settings.default_expand_level;
        self.fold
            .toggle_fold(&mut self.settings.expansion_state, level);
    }

    /// Enter in grouped view on a group row.
    pub(super) fn toggle_selected_group(&mut self) -> bool {
        let expandable = self
            .fold
            .selected()
            .is_some_and(|n| n.kind.is_group() && !n.kind.is_leaf());
        if !expandable {
            return false;
        }
        self.fold
            .toggle_node_expansion(&mut self.settings.expansion_state)
    }

    pub(super) fn collapse_selected(&mut self) {
        if !self.is_grouped_view() {
            return;
        }
        self.fold
            .collapse_selected(&mut self.settings.expansion_state);
    }

    pub(super) fn expand_selected(&mut self) {
        if !self.is_grouped_view() {
            return;
        }
        self.fold
            .expand_selected(&mut self.settings.expansion_state);
    }
}
