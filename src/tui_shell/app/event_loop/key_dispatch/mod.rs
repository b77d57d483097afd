use super::super::*;

mod bindings;
mod context;
mod pending;
mod text_keys;

use self::context::{InputContext, binding_key};

/// Routes one key press. Returns whether anything consumed it.
pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return true;
    }

    let ctx = InputContext::of(app);

    // While typing in the search view, `v` still cycles the view.
    if ctx == InputContext::SearchInput
        && app.view_mode() == ViewMode::Search
        && key.code == KeyCode::Char('v')
        && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
    {
        app.cycle_view_mode();
        return true;
    }

    if pending::handle_pending(app, ctx, &key) {
        return true;
    }

    if let Some(handled) = text_keys::handle_special_keys(app, ctx, &key) {
        return handled;
    }

    if let Some((c, true)) = binding_key(ctx, &key) {
        if bindings::run_binding(app, c) {
            return true;
        }
    }

    text_keys::handle_text_entry(app, ctx, &key)
}
