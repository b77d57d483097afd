use super::*;

impl App {
    /// Reloads active notifications from storage and re-runs the filters.
    /// A failed load keeps the current set and reports the error.
    pub(super) fn reload(&mut self, preserve_cursor: bool) -> bool {
        match self.store.load_active() {
            Ok(items) => {
                debug!(count = items.len(), "loaded notifications");
                self.notifications = items;
                self.apply_filters(preserve_cursor);
                true
            }
            Err(err) => {
                self.push_error(format!("Failed to load notifications: {err}"));
                false
            }
        }
    }

    /// Tab, then read state, then the search query. Rebuilds the tree from
    /// the result.
    pub(super) fn apply_filters(&mut self, preserve_cursor: bool) {
        self.generation += 1;
        let selected_id = if preserve_cursor && !self.is_grouped_view() {
            self.selected_notification().map(|n| n.id)
        } else {
            None
        };

        let tabbed: &[Notification] = match self.settings.active_tab {
            Tab::Recents => {
                let n = self.notifications.len().min(Tab::RECENTS_LIMIT);
                &self.notifications[..n]
            }
            Tab::All => &self.notifications,
        };
        let read_filter = self.settings.read_filter;
        let by_read = tabbed.iter().filter(|n| read_filter.matches(n));

        let query = self.search.buf.trim();
        self.filtered = if query.is_empty() {
            by_read.cloned().collect()
        } else {
            let provider = TokenSearch::new(self.tmux.name_maps());
            search::filter(&provider, by_read, query)
        };

        self.fold.rebuild(
            &self.filtered,
            self.settings.group_by,
            &mut self.settings.expansion_state,
            preserve_cursor,
        );
        if preserve_cursor {
            self.restore_list_cursor(selected_id);
        } else {
            self.list_cursor = 0;
        }
        debug!(
            generation = self.generation,
            shown = self.filtered.len(),
            total = self.notifications.len(),
            "applied filters"
        );
    }

    fn restore_list_cursor(&mut self, id: Option<u64>) {
        let found = id.and_then(|id| self.filtered.iter().position(|n| n.id == id));
        match found {
            Some(i) => self.list_cursor = i,
            None => self.clamp_list_cursor(),
        }
    }

    fn clamp_list_cursor(&mut self) {
        self.list_cursor = self.list_cursor.min(self.filtered.len().saturating_sub(1));
    }

    pub(in crate::tui_shell) fn filtered(&self) -> &[Notification] {
        &self.filtered
    }

    pub(in crate::tui_shell) fn fold(&self) -> &FoldController {
        &self.fold
    }

    pub(in crate::tui_shell) fn cursor(&self) -> usize {
        if self.is_grouped_view() {
            self.fold.cursor()
        } else {
            self.list_cursor
        }
    }

    pub(in crate::tui_shell) fn current_len(&self) -> usize {
        if self.is_grouped_view() {
            self.fold.len()
        } else {
            self.filtered.len()
        }
    }

    pub(super) fn move_up(&mut self) {
        if self.is_grouped_view() {
            self.fold.move_up();
        } else {
            self.list_cursor = self.list_cursor.saturating_sub(1);
        }
    }

    pub(super) fn move_down(&mut self) {
        if self.is_grouped_view() {
            self.fold.move_down();
        } else {
            self.list_cursor = (self.list_cursor + 1).min(self.filtered.len().saturating_sub(1));
        }
    }

    pub(super) fn move_top(&mut self) {
        if self.is_grouped_view() {
            self.fold.move_top();
        } else {
            self.list_cursor = 0;
        }
    }

    pub(super) fn move_bottom(&mut self) {
        if self.is_grouped_view() {
            self.fold.move_bottom();
        } else {
            self.list_cursor = self.filtered.len().saturating_sub(1);
        }
    }

    pub(in crate::tui_shell) fn selected_node(&self) -> Option<&TreeNode> {
        if !self.is_grouped_view() {
            return None;
        }
        self.fold.selected()
    }

    /// The notification under the cursor. In grouped view a message
    /// aggregate stands for its latest event.
    pub(in crate::tui_shell) fn selected_notification(&self) -> Option<&Notification> {
        if !self.is_grouped_view() {
            return self.filtered.get(self.list_cursor);
        }
        let node = self.fold.selected()?;
        match node.kind {
            NodeKind::Notification => node.notification.as_deref(),
            NodeKind::Message if self.settings.group_by == GroupBy::PaneMessage => {
                node.latest_event.as_deref()
            }
            NodeKind::Root | NodeKind::Session | NodeKind::Window | NodeKind::Pane => None,
            NodeKind::Message => None,
        }
    }
}
