use super::*;

/// Single-key bindings. Returns false for keys with no binding.
pub(super) fn run_binding(app: &mut App, c: char) -> bool {
    match c {
        'j' => app.move_down(),
        'k' => app.move_up(),
        'G' => app.move_bottom(),
        'g' => app.pending_key = Some('g'),
        'z' => {
            if !app.is_grouped_view() {
                return false;
            }
            app.pending_key = Some('z');
        }
        '/' => app.enter_search(),
        '?' => app.toggle_help(),
        ':' => app.open_command_line(),
        'd' => app.dismiss_selected(),
        'D' => app.start_dismiss_group(),
        'R' => app.mark_selected_read(),
        'u' => app.mark_selected_unread(),
        'r' => app.switch_tab(Tab::Recents),
        'a' => app.switch_tab(Tab::All),
        'v' => app.cycle_view_mode(),
        'h' => app.collapse_selected(),
        'l' => app.expand_selected(),
        'q' => app.quit_with_save(),
        _ => return false,
    }
    true
}
