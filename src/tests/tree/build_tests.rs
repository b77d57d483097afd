use super::*;
use crate::model::{GroupBy, Notification};

fn notif(id: u64, s: &str, w: &str, p: &str, msg: &str, ts: &str) -> Notification {
    Notification {
        id,
        timestamp: ts.to_string(),
        session: s.to_string(),
        window: w.to_string(),
        pane: p.to_string(),
        message: msg.to_string(),
        ..Default::default()
    }
}

fn read(mut n: Notification) -> Notification {
    n.read_timestamp = "2026-02-01T00:00:00Z".to_string();
    n
}

fn sample() -> Vec<Notification> {
    vec![
        notif(1, "$1", "@1", "%1", "Beta", "2026-01-01T10:00:00Z"),
        notif(2, "$1", "@1", "%1", "Alpha", "2026-01-01T11:00:00Z"),
        notif(3, "$1", "@2", "%2", "Gamma", "2026-01-01T09:00:00Z"),
    ]
}

fn mixed() -> Vec<Notification> {
    vec![
        notif(1, "beta", "@1", "%1", "x", "2026-01-01T10:00:00Z"),
        read(notif(2, "Alpha", "@2", "%3", "y", "2026-01-01T10:01:00Z")),
        notif(3, "alpha", "@1", "%1", "z", "2026-01-01T10:02:00Z"),
        read(notif(4, "beta", "@1", "%2", "same", "2026-01-01T10:03:00Z")),
        notif(5, "beta", "@1", "%2", "same", "2026-01-01T10:04:00Z"),
        notif(6, "", "", "", "orphan", ""),
    ]
}

fn check_counts(node: &TreeNode) {
    if !node.children.is_empty() {
        let count: usize = node.children.iter().map(|c| c.count).sum();
        let unread: usize = node.children.iter().map(|c| c.unread_count).sum();
        assert_eq!(node.count, count, "count of {:?} {}", node.kind, node.title);
        assert_eq!(node.unread_count, unread, "unread of {}", node.title);
    }
    for c in &node.children {
        check_counts(c);
    }
}

fn check_sorted(node: &TreeNode) {
    let titles: Vec<String> = node.children.iter().map(|c| c.title.to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
    for c in &node.children {
        check_sorted(c);
    }
}

fn shape(node: &TreeNode) -> Vec<(NodeKind, String, usize, usize)> {
    let mut out = vec![(node.kind, node.title.clone(), node.count, node.children.len())];
    for c in &node.children {
        out.extend(shape(c));
    }
    out
}

#[test]
fn counts_and_order_hold_for_every_mode() {
    for mode in GroupBy::ALL {
        let root = build_tree_with(&mixed(), mode);
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(root.count, 6, "{mode}");
        assert_eq!(root.unread_count, 4, "{mode}");
        check_counts(&root);
        check_sorted(&root);
    }
}

#[test]
fn pane_grouping_matches_worked_example() {
    let root = build_tree(&sample(), "pane");
    assert_eq!(root.count, 3);
    assert_eq!(root.children.len(), 1);

    let session = &root.children[0];
    assert_eq!(session.kind, NodeKind::Session);
    assert_eq!(session.title, "$1");
    assert_eq!(session.count, 3);
    assert_eq!(
        session.latest_event.as_ref().map(|n| n.message.as_str()),
        Some("Alpha")
    );
    assert_eq!(
        session.earliest_event.as_ref().map(|n| n.message.as_str()),
        Some("Gamma")
    );

    let windows: Vec<&str> = session.children.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(windows, vec!["@1", "@2"]);

    let pane = &session.children[0].children[0];
    assert_eq!(pane.kind, NodeKind::Pane);
    assert_eq!(pane.title, "%1");
    let leaves: Vec<&str> = pane.children.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(leaves, vec!["Alpha", "Beta"]);
    assert!(pane.children.iter().all(|l| l.kind == NodeKind::Notification));
}

#[test]
fn depth_follows_mode() {
    let notifications = sample();

    let none = build_tree(&notifications, "none");
    assert!(none.children.iter().all(|c| c.kind == NodeKind::Notification));
    assert_eq!(none.children.len(), 3);

    let session = build_tree(&notifications, "session");
    assert_eq!(session.children[0].kind, NodeKind::Session);
    assert!(
        session.children[0]
            .children
            .iter()
            .all(|c| c.kind == NodeKind::Notification)
    );

    let window = build_tree(&notifications, "window");
    let w = &window.children[0].children[0];
    assert_eq!(w.kind, NodeKind::Window);
    assert!(w.children.iter().all(|c| c.kind == NodeKind::Notification));
}

#[test]
fn unknown_mode_falls_back_to_pane() {
    let notifications = mixed();
    assert_eq!(
        shape(&build_tree(&notifications, "garbage-mode")),
        shape(&build_tree(&notifications, "pane"))
    );
}

#[test]
fn identical_messages_collapse_into_one_aggregate() {
    let root = build_tree(&mixed(), "pane+message");
    let pane = root
        .children
        .iter()
        .find(|s| s.title == "beta")
        .and_then(|s| s.children.first())
        .and_then(|w| w.children.iter().find(|p| p.title == "%2"))
        .expect("pane %2");
    assert_eq!(pane.children.len(), 1);
    let msg = &pane.children[0];
    assert_eq!(msg.kind, NodeKind::Message);
    assert_eq!(msg.title, "same");
    assert_eq!(msg.count, 2);
    assert_eq!(msg.unread_count, 1);
    assert!(msg.children.is_empty());
    assert_eq!(msg.latest_event.as_ref().map(|n| n.id), Some(5));
}

#[test]
fn empty_input_yields_empty_root() {
    let root = build_tree(&[], "pane");
    assert_eq!(root.kind, NodeKind::Root);
    assert_eq!(root.count, 0);
    assert!(root.children.is_empty());

    let mut store = ExpansionStore::new();
    assert!(rebuild_tree_for_filter(&[], "pane", &mut store).is_none());
}

#[test]
fn empty_timestamps_never_win_latest() {
    let notifications = vec![
        notif(1, "$1", "@1", "%1", "a", "2026-01-01T10:00:00Z"),
        notif(2, "$1", "@1", "%1", "b", ""),
    ];
    let root = build_tree(&notifications, "session");
    assert_eq!(root.latest_event.as_ref().map(|n| n.id), Some(1));
    assert_eq!(root.earliest_event.as_ref().map(|n| n.id), Some(1));
}

#[test]
fn group_stats_track_levels_and_sources() {
    let mut notifications = sample();
    notifications[0].level = "error".to_string();
    let root = build_tree(&notifications, "pane");
    assert_eq!(root.level_counts.get("error"), Some(&1));
    assert_eq!(root.level_counts.get("info"), Some(&2));
    assert_eq!(root.sources.len(), 2);
    assert!(root.sources.contains("$1:@1:%1"));
}

#[test]
fn prune_drops_groups_without_notifications() {
    let mut root = build_tree(&sample(), "pane");
    root.children[0].children[1].children[0].children.clear();
    prune_empty_groups(&mut root);
    let windows: Vec<&str> = root.children[0]
        .children
        .iter()
        .map(|w| w.title.as_str())
        .collect();
    assert_eq!(windows, vec!["@1"]);
}

#[test]
fn identifiers_are_stable_across_rebuilds() {
    let mut store = ExpansionStore::new();
    let first = rebuild_tree_for_filter(&mixed(), "pane", &mut store).expect("tree");
    let second = rebuild_tree_for_filter(&mixed(), "pane", &mut store).expect("tree");
    let ids = |t: &NotificationTree| t.visible().iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert!(ids(&first).contains(&"pane:beta:@1:%252".to_string()));
    assert!(ids(&first).contains(&"notif:5".to_string()));
}

#[test]
fn captured_expansion_reproduces_flags() {
    let mut store = ExpansionStore::new();
    let mut tree = rebuild_tree_for_filter(&mixed(), "pane", &mut store).expect("tree");
    // Collapse the first window of the "beta" session.
    let path = tree
        .visible()
        .iter()
        .find(|r| r.id == "window:beta:@1")
        .map(|r| r.path.clone())
        .expect("window row");
    assert!(tree.set_expanded(&path, false, &mut store));
    let before: Vec<VisibleRow> = tree.visible().to_vec();

    let mut persisted: ExpansionStore =
        serde_json::from_str(&serde_json::to_string(&store).unwrap()).unwrap();
    let rebuilt = rebuild_tree_for_filter(&mixed(), "pane", &mut persisted).expect("tree");
    assert_eq!(rebuilt.visible(), before.as_slice());
}

#[test]
fn unmatched_groups_default_to_expanded() {
    let mut store = ExpansionStore::new();
    store.record("session:$1", "session:$1", false);
    let tree = rebuild_tree_for_filter(&sample(), "pane", &mut store).expect("tree");
    assert_eq!(tree.visible().len(), 1);

    let mut store = ExpansionStore::new();
    store.record("session:$9", "session:$9", false);
    let tree = rebuild_tree_for_filter(&sample(), "pane", &mut store).expect("tree");
    // session, 2 windows, 2 panes, 3 notifications
    assert_eq!(tree.visible().len(), 8);
}

#[test]
fn legacy_keys_are_honored_and_migrated_on_rebuild() {
    let notifications = vec![notif(1, "work:main", "@1", "%1", "m", "2026-01-01T10:00:00Z")];
    let mut store = ExpansionStore::new();
    store.record("session:work:main", "session:work:main", false);

    let tree = rebuild_tree_for_filter(&notifications, "pane", &mut store).expect("tree");
    assert!(!tree.root().children[0].expanded);
    assert_eq!(store.get("session:work%3Amain"), Some(false));
    assert_eq!(store.get("session:work:main"), None);
}

#[test]
fn collapse_removes_exactly_descendants_and_expand_restores() {
    let mut store = ExpansionStore::new();
    let mut tree = rebuild_tree_for_filter(&mixed(), "pane", &mut store).expect("tree");
    let before: Vec<VisibleRow> = tree.visible().to_vec();

    let target = before
        .iter()
        .find(|r| r.id == "window:beta:@1")
        .cloned()
        .expect("window row");
    assert!(tree.set_expanded(&target.path, false, &mut store));
    let collapsed: Vec<VisibleRow> = tree.visible().to_vec();

    let expected: Vec<VisibleRow> = before
        .iter()
        .filter(|r| !r.is_within(&target.path))
        .cloned()
        .collect();
    assert_eq!(collapsed, expected);

    assert!(tree.set_expanded(&target.path, true, &mut store));
    assert_eq!(tree.visible(), before.as_slice());
}

#[test]
fn projection_skips_root_and_never_enters_leaves() {
    let mut store = ExpansionStore::new();
    let tree = rebuild_tree_for_filter(&mixed(), "pane_message", &mut store).expect("tree");
    let rows = tree.visible();
    assert!(rows.iter().all(|r| r.kind != NodeKind::Root));
    assert!(rows.iter().all(|r| r.kind != NodeKind::Notification));
    assert!(rows.iter().any(|r| r.kind == NodeKind::Message));
    assert_eq!(rows[0].depth(), 0);
}

#[test]
fn root_and_notification_rows_cannot_be_toggled() {
    let mut store = ExpansionStore::new();
    let mut tree = rebuild_tree_for_filter(&sample(), "pane", &mut store).expect("tree");
    let leaf = tree
        .visible()
        .iter()
        .find(|r| r.kind == NodeKind::Notification)
        .map(|r| r.path.clone())
        .expect("leaf");
    assert!(!tree.set_expanded(&leaf, false, &mut store));
    assert!(!tree.set_expanded(&[], false, &mut store));
    assert!(store.is_empty());
}
