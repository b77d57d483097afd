use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Modal};

fn modal_title(modal: &Modal) -> &'static str {
    match modal {
        Modal::Confirm { .. } => "Confirm",
        Modal::CommandLine { .. } => "Command",
    }
}

fn centered(area: Rect, w: u16, h: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let box_area = match modal {
        Modal::Confirm { .. } => centered(area, area.width.saturating_sub(6).clamp(20, 60), 6),
        Modal::CommandLine { .. } => centered(
            area,
            area.width.saturating_sub(6).clamp(20, 90),
            area.height.saturating_sub(6).clamp(8, 22),
        ),
    };

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    match modal {
        Modal::Confirm { message, .. } => {
            let lines = vec![
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("y", Style::default().fg(Color::Green)),
                    Span::raw("/Enter confirm  "),
                    Span::styled("n", Style::default().fg(Color::Red)),
                    Span::raw("/Esc cancel"),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }

        Modal::CommandLine {
            input,
            suggestions,
            selected,
        } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);

            let line = Line::from(vec![
                Span::styled(":", Style::default().fg(Color::Yellow)),
                Span::raw(input.buf.as_str()),
            ]);
            frame.render_widget(Paragraph::new(line), parts[0]);
            frame.set_cursor_position((parts[0].x + 1 + input.cursor as u16, parts[0].y));

            let mut rows = Vec::new();
            for (i, s) in suggestions.iter().enumerate() {
                let style = if i == *selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                rows.push(Line::from(vec![
                    Span::styled(format!("{: <14}", s.name), style.add_modifier(Modifier::BOLD)),
                    Span::styled(s.help, style.fg(Color::Gray)),
                ]));
                if i == *selected {
                    rows.push(Line::from(Span::styled(
                        format!("  usage: {}", s.usage),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            if rows.is_empty() {
                rows.push(Line::from("(no matching commands)"));
            }
            frame.render_widget(
                Paragraph::new(rows).block(Block::default().borders(Borders::TOP)),
                parts[1],
            );
        }
    }
}

/// Confirmation answers: Enter/y run the pending action; Esc/n drop it;
/// Ctrl+C drops it and quits. Everything else is ignored.
pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        CloseAndQuit,
        Confirm,
        Run(String),
        Complete,
        Edited,
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match m {
            Modal::Confirm { .. } => match key.code {
                KeyCode::Char('c') if ctrl => ModalAction::CloseAndQuit,
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => ModalAction::Confirm,
                _ => ModalAction::None,
            },

            Modal::CommandLine {
                input,
                suggestions,
                selected,
            } => match key.code {
                KeyCode::Char('c') if ctrl => ModalAction::Close,
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::Run(input.buf.trim().to_string()),
                KeyCode::Tab => ModalAction::Complete,
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if *selected + 1 < suggestions.len() {
                        *selected += 1;
                    }
                    ModalAction::None
                }
                KeyCode::Char('p') if ctrl => {
                    input.history_up();
                    ModalAction::Edited
                }
                KeyCode::Char('n') if ctrl => {
                    input.history_down();
                    ModalAction::Edited
                }
                KeyCode::Backspace => {
                    if input.buf.is_empty() {
                        ModalAction::Close
                    } else {
                        input.backspace();
                        ModalAction::Edited
                    }
                }
                KeyCode::Delete => {
                    input.delete();
                    ModalAction::Edited
                }
                KeyCode::Left => {
                    input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    input.move_right();
                    ModalAction::None
                }
                KeyCode::Char(c)
                    if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.insert_char(c);
                    ModalAction::Edited
                }
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::CloseAndQuit => {
            app.close_modal();
            app.quit_with_save();
        }
        ModalAction::Confirm => {
            if let Some(Modal::Confirm { action, .. }) = app.take_modal() {
                app.execute_confirmed(action);
            }
        }
        ModalAction::Run(line) => {
            app.close_modal();
            if !line.is_empty() {
                app.remember_command(&line);
                app.run_command_line(&line);
            }
        }
        ModalAction::Complete => app.complete_command(),
        ModalAction::Edited => app.recompute_suggestions(),
    }
}
