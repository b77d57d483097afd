use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::tmux::NameKind;
use crate::tree::{FoldController, NodeKind, TreeNode, VisibleRow};

use super::super::{RenderCtx, fmt_ts_list};
use super::list::level_color;

fn label(node: &TreeNode, ctx: &RenderCtx) -> String {
    match node.kind {
        NodeKind::Session => ctx.name(NameKind::Session, &node.title),
        NodeKind::Window => ctx.name(NameKind::Window, &node.title),
        NodeKind::Pane => ctx.name(NameKind::Pane, &node.title),
        NodeKind::Root | NodeKind::Message | NodeKind::Notification => node.display.clone(),
    }
}

fn row<'a>(visible: &VisibleRow, node: &'a TreeNode, ctx: &RenderCtx) -> ListItem<'a> {
    let indent = "  ".repeat(visible.depth());
    let marker = if node.kind.is_leaf() {
        "  "
    } else if node.expanded {
        "▾ "
    } else {
        "▸ "
    };

    let mut spans = vec![Span::raw(indent), Span::raw(marker)];
    match &node.notification {
        Some(n) => {
            let style = if n.is_read() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(label(node, ctx), style));
            spans.push(Span::styled(
                format!("  {}", n.level_key()),
                Style::default().fg(level_color(n.level_key())),
            ));
            spans.push(Span::styled(
                format!("  {}", fmt_ts_list(&n.timestamp, ctx.now)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => {
            spans.push(Span::styled(
                label(node, ctx),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" ({})", node.count)));
            if node.unread_count > 0 {
                spans.push(Span::styled(
                    format!(" {} unread", node.unread_count),
                    Style::default().fg(Color::Cyan),
                ));
            }
            if let Some(latest) = &node.latest_event {
                spans.push(Span::styled(
                    format!("  {}", fmt_ts_list(&latest.timestamp, ctx.now)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    ListItem::new(Line::from(spans))
}

/// One line about the selected node: where it lives and what it holds.
fn details(fold: &FoldController, ctx: &RenderCtx) -> Line<'static> {
    let (Some(tree), Some(row)) = (fold.tree(), fold.selected_row()) else {
        return Line::from("(no selection)");
    };
    let mut parts = Vec::new();
    for depth in 1..=row.path.len() {
        let Some(node) = tree.node(&row.path[..depth]) else {
            continue;
        };
        match node.kind {
            NodeKind::Session | NodeKind::Window | NodeKind::Pane => parts.push(label(node, ctx)),
            NodeKind::Root | NodeKind::Message | NodeKind::Notification => {}
        }
    }
    let Some(node) = tree.node(&row.path) else {
        return Line::from("(no selection)");
    };

    let mut text = parts.join(" › ");
    if node.kind.is_group() {
        let levels = node
            .level_counts
            .iter()
            .map(|(level, n)| format!("{level}={n}"))
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(&format!("  [{levels}]"));
        if node.sources.len() > 1 {
            text.push_str(&format!("  {} sources", node.sources.len()));
        }
        if let Some(earliest) = &node.earliest_event {
            text.push_str(&format!("  since {}", fmt_ts_list(&earliest.timestamp, ctx.now)));
        }
    }
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

pub(in crate::tui_shell) fn render_tree(
    frame: &mut ratatui::Frame,
    area: Rect,
    fold: &FoldController,
    ctx: &RenderCtx,
) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let rows: Vec<ListItem> = match fold.tree() {
        Some(tree) => fold
            .visible()
            .iter()
            .filter_map(|v| tree.node(&v.path).map(|node| row(v, node, ctx)))
            .collect(),
        None => Vec::new(),
    };

    let mut state = ListState::default();
    let rows = if rows.is_empty() {
        vec![ListItem::new("(no notifications)")]
    } else {
        state.select(Some(fold.cursor().min(rows.len() - 1)));
        rows
    };
    let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[0], &mut state);

    frame.render_widget(
        Paragraph::new(details(fold, ctx)).block(Block::default().borders(Borders::TOP)),
        parts[1],
    );
}
