use std::cell::OnceCell;

use tracing::trace;

use super::expansion::ExpansionStore;
use super::ident::{self, legacy_group_key, node_id};
use super::node::{NodeKind, TreeNode};

/// One displayed row of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// Child indices from the root down to the node.
    pub path: Vec<usize>,
    pub kind: NodeKind,
    pub id: String,
}

impl VisibleRow {
    /// Indentation depth; root's children are depth 0.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether `self` sits strictly inside the subtree at `ancestor`.
    pub fn is_within(&self, ancestor: &[usize]) -> bool {
        self.path.len() > ancestor.len() && self.path.starts_with(ancestor)
    }
}

/// Pre-order rows: root is skipped but its children always shown; leaves are
/// never entered; other nodes are entered only when expanded.
pub fn compute_visible(root: &TreeNode) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    let mut path = Vec::new();
    let mut titles = Vec::new();
    for (i, child) in root.children.iter().enumerate() {
        path.push(i);
        walk(child, &mut path, &mut titles, &mut rows);
        path.pop();
    }
    rows
}

fn walk<'a>(
    node: &'a TreeNode,
    path: &mut Vec<usize>,
    titles: &mut Vec<&'a str>,
    rows: &mut Vec<VisibleRow>,
) {
    rows.push(VisibleRow {
        path: path.clone(),
        kind: node.kind,
        id: node_id(node, titles),
    });
    if node.kind.is_leaf() || !node.expanded {
        return;
    }
    titles.push(&node.title);
    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        walk(child, path, titles, rows);
        path.pop();
    }
    titles.pop();
}

/// A built tree plus its visible-row cache.
///
/// The root is only reachable mutably through methods that drop the cache,
/// so the projection can never be observed stale.
#[derive(Debug)]
pub struct NotificationTree {
    root: TreeNode,
    visible: OnceCell<Vec<VisibleRow>>,
}

impl NotificationTree {
    pub fn new(root: TreeNode) -> Self {
        Self {
            root,
            visible: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn visible(&self) -> &[VisibleRow] {
        self.visible.get_or_init(|| {
            let rows = compute_visible(&self.root);
            trace!(rows = rows.len(), "recomputed visible rows");
            rows
        })
    }

    pub fn invalidate(&mut self) {
        self.visible = OnceCell::new();
    }

    pub fn node(&self, path: &[usize]) -> Option<&TreeNode> {
        let mut node = &self.root;
        for &i in path {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    /// Titles of the group nodes strictly above `path`, outermost first.
    pub fn ancestor_titles(&self, path: &[usize]) -> Vec<&str> {
        let mut out = Vec::new();
        let mut node = &self.root;
        for &i in path.iter().take(path.len().saturating_sub(1)) {
            let Some(child) = node.children.get(i) else {
                break;
            };
            out.push(child.title.as_str());
            node = child;
        }
        out
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.visible().iter().position(|row| row.id == id)
    }

    /// Sets the flag on a group node and records it. Returns false for
    /// root, notification rows, or a path that does not exist.
    pub fn set_expanded(
        &mut self,
        path: &[usize],
        expanded: bool,
        store: &mut ExpansionStore,
    ) -> bool {
        let (key, legacy) = match self.node(path) {
            Some(node) if node.kind.is_group() => {
                let titles = self.ancestor_titles(path);
                let mut parts = titles.clone();
                parts.push(node.title.as_str());
                (node_id(node, &titles), legacy_group_key(node.kind, &parts))
            }
            _ => return false,
        };
        let Some(node) = node_at_mut(&mut self.root, path) else {
            return false;
        };
        node.expanded = expanded;
        store.record(&key, &legacy, expanded);
        self.invalidate();
        true
    }

    /// Applies saved flags to every group node; unknown groups open.
    pub fn apply_expansion(&mut self, store: &mut ExpansionStore) {
        for_each_group_mut(&mut self.root, &mut Vec::new(), &mut |node, parts| {
            let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
            let key = ident::group_key(node.kind, &refs);
            let legacy = legacy_group_key(node.kind, &refs);
            node.expanded = store.lookup(&key, &legacy).unwrap_or(true);
        });
        self.invalidate();
    }

    /// Opens groups whose one-based depth is within `level`, closes the rest,
    /// and records every flag.
    pub fn apply_default_expansion(&mut self, level: u8, store: &mut ExpansionStore) {
        for_each_group_mut(&mut self.root, &mut Vec::new(), &mut |node, parts| {
            let Some(k) = node.kind.level() else {
                return;
            };
            let expanded = k < level;
            node.expanded = expanded;
            let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
            store.record(
                &ident::group_key(node.kind, &refs),
                &legacy_group_key(node.kind, &refs),
                expanded,
            );
        });
        self.invalidate();
    }

    /// True when at least one expandable group exists and none is expanded.
    /// Message rows never open, so their flag is ignored.
    pub fn all_groups_collapsed(&self) -> bool {
        fn scan(node: &TreeNode, seen: &mut bool) -> bool {
            if node.kind.is_group() && !node.kind.is_leaf() {
                *seen = true;
                if node.expanded {
                    return false;
                }
            }
            node.children.iter().all(|c| scan(c, seen))
        }
        let mut seen = false;
        scan(&self.root, &mut seen) && seen
    }
}

fn node_at_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> Option<&'a mut TreeNode> {
    let mut node = root;
    for &i in path {
        node = node.children.get_mut(i)?;
    }
    Some(node)
}

/// Visits group nodes with their full title path (including their own title).
fn for_each_group_mut(
    node: &mut TreeNode,
    parts: &mut Vec<String>,
    f: &mut dyn FnMut(&mut TreeNode, &[String]),
) {
    let pushed = node.kind.is_group();
    if pushed {
        parts.push(node.title.clone());
        f(node, parts);
    }
    for child in node.children.iter_mut() {
        for_each_group_mut(child, parts, f);
    }
    if pushed {
        parts.pop();
    }
}
