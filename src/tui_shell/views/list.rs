use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::model::Notification;
use crate::tmux::NameKind;

use super::super::{RenderCtx, fmt_ts_list};

pub(in crate::tui_shell) fn level_color(level: &str) -> Color {
    match level {
        "error" | "critical" => Color::Red,
        "warning" | "warn" => Color::Yellow,
        _ => Color::Gray,
    }
}

fn row<'a>(n: &'a Notification, detailed: bool, ctx: &RenderCtx) -> ListItem<'a> {
    let mark = if n.is_read() {
        Span::raw("  ")
    } else {
        Span::styled("● ", Style::default().fg(Color::Cyan))
    };
    let ts = fmt_ts_list(&n.timestamp, ctx.now);
    let origin = format!(
        "{}:{}",
        ctx.name(NameKind::Session, &n.session),
        ctx.name(NameKind::Window, &n.window)
    );

    let mut spans = vec![
        mark,
        Span::styled(format!("{ts: <10} "), Style::default().fg(Color::DarkGray)),
    ];
    if detailed {
        let level = n.level_key();
        spans.push(Span::styled(
            format!("{level: <8}"),
            Style::default().fg(level_color(level)),
        ));
        spans.push(Span::styled(
            format!("{origin: <24} {: <10} ", ctx.name(NameKind::Pane, &n.pane)),
            Style::default().fg(Color::Gray),
        ));
    } else {
        spans.push(Span::styled(
            format!("{origin: <24} "),
            Style::default().fg(Color::Gray),
        ));
    }
    spans.push(Span::raw(n.message.as_str()));
    ListItem::new(Line::from(spans))
}

/// Flat list for the compact, detailed and search views.
pub(in crate::tui_shell) fn render_list(
    frame: &mut ratatui::Frame,
    area: Rect,
    items: &[Notification],
    cursor: usize,
    detailed: bool,
    ctx: &RenderCtx,
) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(cursor.min(items.len() - 1)));
    }

    let mut rows: Vec<ListItem> = items.iter().map(|n| row(n, detailed, ctx)).collect();
    if rows.is_empty() {
        rows.push(ListItem::new("(no notifications)"));
    }
    let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}
