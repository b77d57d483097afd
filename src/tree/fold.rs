use tracing::debug;

use crate::model::{GroupBy, Notification};

use super::build::rebuild_tree_for_filter;
use super::expansion::ExpansionStore;
use super::node::TreeNode;
use super::visible::{NotificationTree, VisibleRow};

pub const MIN_EXPAND_LEVEL: u8 = 0;
pub const MAX_EXPAND_LEVEL: u8 = 3;

/// Cursor over the visible rows of the current tree, plus the fold
/// operations that reshape those rows.
///
/// The cursor is a plain index. Anything that reflows the rows captures the
/// selected identifier first and resolves it again afterwards.
#[derive(Debug, Default)]
pub struct FoldController {
    tree: Option<NotificationTree>,
    cursor: usize,
}

impl FoldController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> Option<&NotificationTree> {
        self.tree.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn visible(&self) -> &[VisibleRow] {
        match &self.tree {
            Some(tree) => tree.visible(),
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.visible().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected_row(&self) -> Option<&VisibleRow> {
        self.visible().get(self.cursor)
    }

    pub fn selected(&self) -> Option<&TreeNode> {
        let row = self.selected_row()?;
        self.tree.as_ref()?.node(&row.path)
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected_row().map(|row| row.id.clone())
    }

    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
    }

    /// Empty projection -> 0, past the end -> last row.
    pub fn clamp_cursor(&mut self) {
        let len = self.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.clamp_cursor();
    }

    pub fn move_down(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
        self.clamp_cursor();
    }

    pub fn move_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_bottom(&mut self) {
        self.cursor = self.len().saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.tree = None;
        self.cursor = 0;
    }

    /// Rebuilds from `notifications`. With `preserve_cursor` the previously
    /// selected node stays selected when it survives the rebuild.
    pub fn rebuild(
        &mut self,
        notifications: &[Notification],
        group_by: GroupBy,
        store: &mut ExpansionStore,
        preserve_cursor: bool,
    ) {
        let selected = if preserve_cursor {
            self.selected_id()
        } else {
            None
        };
        self.tree = rebuild_tree_for_filter(notifications, group_by.as_str(), store);
        if !preserve_cursor {
            self.cursor = 0;
        }
        self.restore_cursor(selected.as_deref());
    }

    /// Moves the cursor onto `id` when it is visible; otherwise clamps.
    pub fn restore_cursor(&mut self, id: Option<&str>) {
        let found = match (id, &self.tree) {
            (Some(id), Some(tree)) => tree.position(id),
            _ => None,
        };
        match found {
            Some(i) => self.cursor = i,
            None => self.clamp_cursor(),
        }
    }

    /// Flips the selected group. Not handled on notification rows or an empty view.
    pub fn toggle_node_expansion(&mut self, store: &mut ExpansionStore) -> bool {
        let Some(node) = self.selected() else {
            return false;
        };
        if !node.kind.is_group() {
            return false;
        }
        let expanded = node.expanded;
        let Some(path) = self.selected_row().map(|row| row.path.clone()) else {
            return false;
        };
        let handled = match self.tree.as_mut() {
            Some(tree) => tree.set_expanded(&path, !expanded, store),
            None => false,
        };
        self.clamp_cursor();
        handled
    }

    /// `za`: on a fully collapsed tree restores the default expansion,
    /// otherwise toggles the selected group.
    pub fn toggle_fold(&mut self, store: &mut ExpansionStore, expand_level: u8) -> bool {
        let Some(node) = self.selected() else {
            return false;
        };
        if node.kind.is_leaf() {
            return false;
        }
        let all_collapsed = self
            .tree
            .as_ref()
            .is_some_and(NotificationTree::all_groups_collapsed);
        if all_collapsed {
            self.apply_default_expansion(store, expand_level);
            return true;
        }
        self.toggle_node_expansion(store)
    }

    pub fn expand_selected(&mut self, store: &mut ExpansionStore) -> bool {
        let Some(path) = self.selected_row().map(|row| row.path.clone()) else {
            return false;
        };
        self.expand_node(&path, store)
    }

    pub fn collapse_selected(&mut self, store: &mut ExpansionStore) -> bool {
        let Some(path) = self.selected_row().map(|row| row.path.clone()) else {
            return false;
        };
        self.collapse_node(&path, store)
    }

    pub fn expand_node(&mut self, path: &[usize], store: &mut ExpansionStore) -> bool {
        let selected = self.selected_id();
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        if !tree.set_expanded(path, true, store) {
            return false;
        }
        self.restore_cursor(selected.as_deref());
        true
    }

    /// Collapses the node at `path`. A selection hidden by the collapse moves
    /// onto the collapsed node itself.
    pub fn collapse_node(&mut self, path: &[usize], store: &mut ExpansionStore) -> bool {
        let selected = self.selected_row().cloned();
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let node_id = tree.visible().iter().find(|r| r.path == path).map(|r| r.id.clone());
        if !tree.set_expanded(path, false, store) {
            return false;
        }

        match selected {
            Some(row) if row.is_within(path) => {
                let target = node_id.and_then(|id| tree.position(&id));
                match target {
                    Some(i) => self.cursor = i,
                    None => self.clamp_cursor(),
                }
            }
            Some(row) => self.restore_cursor(Some(&row.id)),
            None => self.clamp_cursor(),
        }
        self.clamp_cursor();
        true
    }

    /// Resets every group to the configured default depth.
    pub fn apply_default_expansion(&mut self, store: &mut ExpansionStore, expand_level: u8) {
        let level = expand_level.clamp(MIN_EXPAND_LEVEL, MAX_EXPAND_LEVEL);
        let selected = self.selected_id();
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        tree.apply_default_expansion(level, store);
        debug!(level, "applied default expansion");
        self.restore_cursor(selected.as_deref());
    }
}

#[cfg(test)]
#[path = "../tests/tree/fold_tests.rs"]
mod tests;
