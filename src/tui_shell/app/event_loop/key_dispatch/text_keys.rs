use super::*;

/// Keys with fixed meaning in every context. `None` lets the key fall
/// through to bindings and text entry.
pub(super) fn handle_special_keys(
    app: &mut App,
    ctx: InputContext,
    key: &KeyEvent,
) -> Option<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.quit_with_save(),
        KeyCode::Char('j') if ctrl => {
            if ctx.is_search() {
                app.move_down();
            }
        }
        KeyCode::Char('k') if ctrl => {
            if ctx.is_search() {
                app.move_up();
            }
        }
        KeyCode::Char('h') if ctrl => {
            if ctx.is_search() {
                app.collapse_selected();
            }
        }
        KeyCode::Char('l') if ctrl => {
            if ctx.is_search() {
                app.expand_selected();
            }
        }
        KeyCode::Esc => {
            if ctx == InputContext::SearchInput {
                app.exit_search(true);
            } else {
                app.quit_without_save();
            }
        }
        KeyCode::Enter => handle_enter(app, ctx),
        KeyCode::Backspace if ctx == InputContext::SearchInput => app.search_backspace(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        _ => return None,
    }
    Some(true)
}

fn handle_enter(app: &mut App, ctx: InputContext) {
    if ctx == InputContext::SearchInput {
        if app.view_mode() == ViewMode::Search {
            app.start_jump();
        } else {
            app.exit_search(false);
        }
        return;
    }
    if app.is_grouped_view() && app.toggle_selected_group() {
        return;
    }
    app.start_jump();
}

/// Plain characters typed into the search query.
pub(super) fn handle_text_entry(app: &mut App, ctx: InputContext, key: &KeyEvent) -> bool {
    if ctx != InputContext::SearchInput {
        return false;
    }
    let KeyCode::Char(c) = key.code else {
        return false;
    };
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }
    app.search_insert(c);
    true
}
