use super::*;
use crate::tui_shell::views;

const HELP: &[(&str, &str)] = &[
    ("j/k ↓/↑", "move"),
    ("gg / G", "top / bottom"),
    ("h / l", "collapse / expand"),
    ("za", "toggle fold (restores default when all folded)"),
    ("Enter", "toggle group / jump to pane"),
    ("/", "search (Esc clears)"),
    ("v", "cycle view"),
    ("r / a", "recents / all"),
    ("R / u", "mark read / unread"),
    ("d / D", "dismiss / dismiss group"),
    (":", "command line"),
    ("q / Esc", "quit"),
];

fn tab_span(label: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
    }
}

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let show_search = app.search_mode || !app.search.buf.is_empty();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(if show_search { 1 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let unread = app.filtered.iter().filter(|n| !n.is_read()).count();
    let spans = vec![
        Span::styled("intray", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        tab_span("Recents", app.settings.active_tab == Tab::Recents),
        tab_span("All", app.settings.active_tab == Tab::All),
        Span::raw("  "),
        Span::styled(
            format!(
                "view={} group={} filter={}",
                app.view_mode(), app.group_by(), app.settings.read_filter
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{}/{} shown, {} unread",
                app.filtered.len(),
                app.notifications.len(),
                unread
            ),
            Style::default().fg(Color::Green),
        ),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Main view
    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
        tmux: app.tmux.as_ref(),
    };
    let title = Line::from(Span::styled(
        match app.view_mode() {
            ViewMode::Compact => "Notifications",
            ViewMode::Detailed => "Notifications (detailed)",
            ViewMode::Grouped => "Notifications by source",
            ViewMode::Search => "Search",
        },
        Style::default().fg(Color::Yellow),
    ));
    let inner = render_view_chrome(frame, title, chunks[1]);
    if app.is_grouped_view() {
        views::render_tree(frame, inner, app.fold(), &ctx);
    } else {
        views::render_list(
            frame,
            inner,
            app.filtered(),
            app.cursor(),
            app.view_mode() == ViewMode::Detailed,
            &ctx,
        );
    }

    // Search line
    if show_search {
        let prompt_style = if app.search_mode {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("/", prompt_style),
            Span::raw(app.search.buf.as_str()),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[2]);
        if app.search_mode && app.modal.is_none() {
            frame.set_cursor_position((chunks[2].x + 1 + app.search.cursor as u16, chunks[2].y));
        }
    }

    // Status footer
    let footer = match app.status_text() {
        Some((level, text)) => {
            let color = match level {
                StatusLevel::Info => Color::White,
                StatusLevel::Warning => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
        }
        None => {
            let mut spans = vec![Span::styled(
                "? help  : command  / search  q quit",
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(c) = app.pending_key {
                spans.push(Span::styled(
                    format!("  {c}-"),
                    Style::default().fg(Color::Cyan),
                ));
            }
            if app.jump_in_flight {
                spans.push(Span::styled("  jumping…", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(footer), chunks[3]);

    if app.show_help {
        draw_help(frame);
    }
    if let Some(m) = app.modal() {
        modal::draw_modal(frame, m);
    }
}

fn draw_help(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = (HELP.len() as u16 + 2).min(area.height);
    let box_area = ratatui::layout::Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w.min(area.width),
        height: h,
    };
    frame.render_widget(ratatui::widgets::Clear, box_area);

    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys: <10}"), Style::default().fg(Color::Cyan)),
                Span::raw(*what),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Keys (? to close)")),
        box_area,
    );
}
