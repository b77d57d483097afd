//! Stable node identifiers.
//!
//! Trees are rebuilt from scratch on every change, so nodes are correlated
//! across rebuilds only through these strings. Notification rows use
//! `notif:<id>`. Group rows use `<kind>:<seg>:<seg>...` over the titles from
//! the outermost group down to the node itself, with `%` and `:` escaped in
//! every segment. The legacy form joined raw titles and could collide.

use super::node::{NodeKind, TreeNode};

pub const ROOT_ID: &str = "root";

pub fn notification_id(id: u64) -> String {
    format!("notif:{id}")
}

/// Identifier for `node`, given the titles of its group ancestors (outermost first).
pub fn node_id(node: &TreeNode, ancestor_titles: &[&str]) -> String {
    match node.kind {
        NodeKind::Root => ROOT_ID.to_string(),
        NodeKind::Notification => match &node.notification {
            Some(n) => notification_id(n.id),
            None => String::new(),
        },
        NodeKind::Session | NodeKind::Window | NodeKind::Pane | NodeKind::Message => {
            let mut parts: Vec<&str> = ancestor_titles.to_vec();
            parts.push(node.title.as_str());
            group_key(node.kind, &parts)
        }
    }
}

pub fn group_key(kind: NodeKind, parts: &[&str]) -> String {
    let encoded: Vec<String> = parts.iter().map(|p| escape_segment(p)).collect();
    format!("{}:{}", kind.tag(), encoded.join(":"))
}

pub fn legacy_group_key(kind: NodeKind, parts: &[&str]) -> String {
    format!("{}:{}", kind.tag(), parts.join(":"))
}

fn escape_segment(value: &str) -> String {
    value.replace('%', "%25").replace(':', "%3A")
}
