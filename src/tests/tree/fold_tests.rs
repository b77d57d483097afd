use super::*;

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

fn sample() -> Vec<Notification> {
    vec![
        notif(1, "$1", "@1", "%1", "Beta", "2026-01-01T10:00:00Z"),
        notif(2, "$1", "@1", "%1", "Alpha", "2026-01-01T11:00:00Z"),
        notif(3, "$1", "@2", "%2", "Gamma", "2026-01-01T09:00:00Z"),
    ]
}

// Rows when fully expanded:
// 0 session:$1
// 1 window:$1:@1
// 2 pane:$1:@1:%251
// 3 notif:2
// 4 notif:1
// 5 window:$1:@2
// 6 pane:$1:@2:%252
// 7 notif:3
fn controller(store: &mut ExpansionStore) -> FoldController {
    let mut fc = FoldController::new();
    fc.rebuild(&sample(), GroupBy::Pane, store, false);
    fc
}

fn ids(fc: &FoldController) -> Vec<String> {
    fc.visible().iter().map(|r| r.id.clone()).collect()
}

#[test]
fn fresh_tree_is_fully_expanded() {
    let mut store = ExpansionStore::new();
    let fc = controller(&mut store);
    assert_eq!(fc.len(), 8);
    assert_eq!(fc.cursor(), 0);
    assert_eq!(fc.selected_id().as_deref(), Some("session:$1"));
}

#[test]
fn collapse_moves_hidden_selection_onto_the_node() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(3);
    assert!(fc.collapse_node(&[0, 0], &mut store));
    assert_eq!(fc.selected_id().as_deref(), Some("window:$1:@1"));
    assert_eq!(fc.len(), 5);
}

#[test]
fn collapse_keeps_selection_outside_the_subtree() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(6);
    assert!(fc.collapse_node(&[0, 0], &mut store));
    assert_eq!(fc.selected_id().as_deref(), Some("pane:$1:@2:%252"));
    assert_eq!(fc.cursor(), 3);
}

#[test]
fn expand_restores_rows_and_selection() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    let before = ids(&fc);
    fc.set_cursor(6);
    assert!(fc.collapse_node(&[0, 0], &mut store));
    assert!(fc.expand_node(&[0, 0], &mut store));
    assert_eq!(ids(&fc), before);
    assert_eq!(fc.selected_id().as_deref(), Some("pane:$1:@2:%252"));
}

#[test]
fn toggle_flips_groups_and_records_the_result() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    assert!(fc.toggle_node_expansion(&mut store));
    assert_eq!(fc.len(), 1);
    assert_eq!(store.get("session:$1"), Some(false));

    assert!(fc.toggle_node_expansion(&mut store));
    assert_eq!(fc.len(), 8);
    assert_eq!(store.get("session:$1"), Some(true));
}

#[test]
fn toggle_is_not_handled_on_notification_rows() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(3);
    assert!(!fc.toggle_node_expansion(&mut store));
    assert!(!fc.toggle_fold(&mut store, 1));
    assert_eq!(fc.len(), 8);
    assert!(store.is_empty());
}

#[test]
fn toggle_fold_on_collapsed_tree_applies_default_depth() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.apply_default_expansion(&mut store, 0);
    assert_eq!(ids(&fc), vec!["session:$1".to_string()]);

    assert!(fc.toggle_fold(&mut store, 2));
    assert_eq!(
        ids(&fc),
        vec![
            "session:$1",
            "window:$1:@1",
            "pane:$1:@1:%251",
            "window:$1:@2",
            "pane:$1:@2:%252",
        ]
    );
    assert_eq!(store.get("pane:$1:@1:%251"), Some(false));
}

#[test]
fn toggle_fold_ignores_message_rows_when_checking_collapse() {
    let mut store = ExpansionStore::new();
    let mut fc = FoldController::new();
    fc.rebuild(&sample(), GroupBy::PaneMessage, &mut store, false);
    assert!(fc.collapse_node(&[0], &mut store));
    assert_eq!(ids(&fc), vec!["session:$1".to_string()]);

    assert!(fc.toggle_fold(&mut store, 2));
    assert_eq!(
        ids(&fc),
        vec![
            "session:$1",
            "window:$1:@1",
            "pane:$1:@1:%251",
            "window:$1:@2",
            "pane:$1:@2:%252",
        ]
    );
}

#[test]
fn toggle_fold_on_partly_expanded_tree_toggles_selection() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(5);
    assert!(fc.toggle_fold(&mut store, 1));
    assert_eq!(fc.len(), 6);
    assert_eq!(store.get("window:$1:@2"), Some(false));
}

#[test]
fn default_expansion_level_is_clamped() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.apply_default_expansion(&mut store, 0);
    fc.apply_default_expansion(&mut store, 200);
    assert_eq!(fc.len(), 8);
}

#[test]
fn rebuild_preserves_selection_by_identifier() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(7);

    let mut more = sample();
    more.push(notif(4, "$0", "@9", "%9", "Delta", "2026-01-01T12:00:00Z"));
    fc.rebuild(&more, GroupBy::Pane, &mut store, true);
    assert_eq!(fc.selected_id().as_deref(), Some("notif:3"));
    assert_eq!(fc.cursor(), 11);

    fc.rebuild(&more, GroupBy::Pane, &mut store, false);
    assert_eq!(fc.cursor(), 0);
}

#[test]
fn rebuild_clamps_when_selection_disappears() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(7);
    let fewer: Vec<Notification> = sample().into_iter().take(2).collect();
    fc.rebuild(&fewer, GroupBy::Pane, &mut store, true);
    assert_eq!(fc.len(), 5);
    assert_eq!(fc.cursor(), 4);
}

#[test]
fn empty_rebuild_clears_everything() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.set_cursor(4);
    fc.rebuild(&[], GroupBy::Pane, &mut store, true);
    assert!(fc.tree().is_none());
    assert!(fc.is_empty());
    assert_eq!(fc.cursor(), 0);
    assert!(fc.selected().is_none());
    assert!(!fc.toggle_node_expansion(&mut store));
}

#[test]
fn movement_stays_in_bounds() {
    let mut store = ExpansionStore::new();
    let mut fc = controller(&mut store);
    fc.move_up();
    assert_eq!(fc.cursor(), 0);
    fc.move_bottom();
    assert_eq!(fc.cursor(), 7);
    fc.move_down();
    assert_eq!(fc.cursor(), 7);
    fc.move_top();
    assert_eq!(fc.cursor(), 0);
    fc.set_cursor(99);
    assert_eq!(fc.cursor(), 7);
}
