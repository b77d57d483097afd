use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::model::{GroupBy, Notification};

use super::NotificationTree;
use super::expansion::ExpansionStore;
use super::node::{NodeKind, TreeNode};

/// Grouping levels below the root, outermost first.
fn levels(group_by: GroupBy) -> &'static [NodeKind] {
    match group_by {
        GroupBy::None => &[],
        GroupBy::Session => &[NodeKind::Session],
        GroupBy::Window => &[NodeKind::Session, NodeKind::Window],
        GroupBy::Pane => &[NodeKind::Session, NodeKind::Window, NodeKind::Pane],
        GroupBy::PaneMessage => &[
            NodeKind::Session,
            NodeKind::Window,
            NodeKind::Pane,
            NodeKind::Message,
        ],
    }
}

fn group_key(kind: NodeKind, n: &Notification) -> &str {
    match kind {
        NodeKind::Session => &n.session,
        NodeKind::Window => &n.window,
        NodeKind::Pane => &n.pane,
        NodeKind::Message => &n.message,
        NodeKind::Root | NodeKind::Notification => "",
    }
}

/// Groups `notifications` into a fresh tree. Unknown `group_by` values group by pane.
pub fn build_tree(notifications: &[Notification], group_by: &str) -> TreeNode {
    build_tree_with(notifications, GroupBy::resolve(group_by))
}

pub fn build_tree_with(notifications: &[Notification], group_by: GroupBy) -> TreeNode {
    let items: Vec<Rc<Notification>> = notifications.iter().cloned().map(Rc::new).collect();

    let mut root = TreeNode::root();
    for n in &items {
        root.absorb(n);
    }
    root.children = group_level(&items, levels(group_by));
    root
}

fn group_level(items: &[Rc<Notification>], levels: &[NodeKind]) -> Vec<TreeNode> {
    let Some((&kind, rest)) = levels.split_first() else {
        let mut leaves: Vec<TreeNode> = items.iter().cloned().map(TreeNode::leaf).collect();
        sort_siblings(&mut leaves);
        return leaves;
    };

    // First-seen order; sorting happens once the level is complete.
    let mut groups: Vec<(TreeNode, Vec<Rc<Notification>>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for n in items {
        let key = group_key(kind, n);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((TreeNode::group(kind, key), Vec::new()));
            groups.len() - 1
        });
        let (node, members) = &mut groups[slot];
        node.absorb(n);
        members.push(Rc::clone(n));
    }

    let mut nodes: Vec<TreeNode> = groups
        .into_iter()
        .map(|(mut node, members)| {
            // Message rows aggregate; they never carry notification children.
            if kind != NodeKind::Message {
                node.children = group_level(&members, rest);
            }
            node
        })
        .collect();
    sort_siblings(&mut nodes);
    nodes
}

fn sort_siblings(nodes: &mut [TreeNode]) {
    nodes.sort_by_cached_key(|n| n.title.to_lowercase());
}

/// Drops groups whose subtree holds no notifications, bottom-up.
pub fn prune_empty_groups(node: &mut TreeNode) {
    for child in node.children.iter_mut() {
        prune_empty_groups(child);
    }
    node.children.retain(|child| match child.kind {
        NodeKind::Notification => true,
        NodeKind::Message => child.count > 0,
        NodeKind::Root | NodeKind::Session | NodeKind::Window | NodeKind::Pane => {
            !child.children.is_empty()
        }
    });
}

/// Builds, prunes and re-applies saved expansion. An empty input clears the tree.
pub fn rebuild_tree_for_filter(
    notifications: &[Notification],
    group_by: &str,
    store: &mut ExpansionStore,
) -> Option<NotificationTree> {
    if notifications.is_empty() {
        return None;
    }
    let mut root = build_tree(notifications, group_by);
    prune_empty_groups(&mut root);

    let mut tree = NotificationTree::new(root);
    tree.apply_expansion(store);
    debug!(
        count = notifications.len(),
        group_by,
        saved = store.len(),
        "rebuilt notification tree"
    );
    Some(tree)
}
