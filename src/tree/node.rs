use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::model::Notification;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Session,
    Window,
    Pane,
    Message,
    Notification,
}

impl NodeKind {
    /// Prefix used in expansion keys.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Session => "session",
            NodeKind::Window => "window",
            NodeKind::Pane => "pane",
            NodeKind::Message => "message",
            NodeKind::Notification => "notification",
        }
    }

    /// Session, window, pane and message aggregates.
    pub fn is_group(self) -> bool {
        match self {
            NodeKind::Session | NodeKind::Window | NodeKind::Pane | NodeKind::Message => true,
            NodeKind::Root | NodeKind::Notification => false,
        }
    }

    /// Rows the projection never descends into.
    pub fn is_leaf(self) -> bool {
        match self {
            NodeKind::Notification | NodeKind::Message => true,
            NodeKind::Root | NodeKind::Session | NodeKind::Window | NodeKind::Pane => false,
        }
    }

    /// Zero-based grouping level; `None` for root and notification rows.
    pub fn level(self) -> Option<u8> {
        match self {
            NodeKind::Session => Some(0),
            NodeKind::Window => Some(1),
            NodeKind::Pane => Some(2),
            NodeKind::Message => Some(3),
            NodeKind::Root | NodeKind::Notification => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TreeNode {
    pub kind: NodeKind,
    /// Raw grouping key: a tmux id for session/window/pane rows, message text otherwise.
    pub title: String,
    pub display: String,
    pub expanded: bool,
    pub count: usize,
    pub unread_count: usize,
    pub latest_event: Option<Rc<Notification>>,
    pub earliest_event: Option<Rc<Notification>>,
    pub level_counts: BTreeMap<String, usize>,
    /// Distinct `session:window:pane` origins.
    pub sources: BTreeSet<String>,
    pub notification: Option<Rc<Notification>>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub(super) fn group(kind: NodeKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            display: title.to_string(),
            expanded: false,
            count: 0,
            unread_count: 0,
            latest_event: None,
            earliest_event: None,
            level_counts: BTreeMap::new(),
            sources: BTreeSet::new(),
            notification: None,
            children: Vec::new(),
        }
    }

    pub(super) fn root() -> Self {
        let mut root = Self::group(NodeKind::Root, "root");
        root.expanded = true;
        root
    }

    pub(super) fn leaf(n: Rc<Notification>) -> Self {
        let mut leaf = Self::group(NodeKind::Notification, &n.message);
        leaf.absorb(&n);
        leaf.notification = Some(n);
        leaf
    }

    /// Folds one notification into this node's aggregates.
    pub(super) fn absorb(&mut self, n: &Rc<Notification>) {
        self.count += 1;
        if !n.is_read() {
            self.unread_count += 1;
        }
        let newer = match &self.latest_event {
            None => true,
            Some(latest) => is_newer(&n.timestamp, &latest.timestamp),
        };
        if newer {
            self.latest_event = Some(Rc::clone(n));
        }
        let older = match &self.earliest_event {
            None => true,
            Some(earliest) => is_older(&n.timestamp, &earliest.timestamp),
        };
        if older {
            self.earliest_event = Some(Rc::clone(n));
        }
        *self
            .level_counts
            .entry(n.level_key().to_string())
            .or_insert(0) += 1;
        self.sources
            .insert(format!("{}:{}:{}", n.session, n.window, n.pane));
    }

    pub fn is_group(&self) -> bool {
        self.kind.is_group()
    }
}

// RFC 3339 timestamps compare lexicographically. An empty timestamp is never
// newer than anything and is always replaced.
fn is_newer(current: &str, latest: &str) -> bool {
    if current.is_empty() {
        return false;
    }
    latest.is_empty() || current > latest
}

fn is_older(current: &str, earliest: &str) -> bool {
    if current.is_empty() {
        return false;
    }
    earliest.is_empty() || current < earliest
}
