use super::*;

/// Resolves `gg` and `za`. Any other key drops the pending prefix, except a
/// repeated `z` which keeps waiting.
pub(super) fn handle_pending(app: &mut App, ctx: InputContext, key: &KeyEvent) -> bool {
    let Some(pending) = app.pending_key else {
        return false;
    };
    let c = match binding_key(ctx, key) {
        Some((c, true)) => c,
        _ => {
            app.pending_key = None;
            return false;
        }
    };

    match (pending, c) {
        ('z', 'a') if app.is_grouped_view() => {
            app.pending_key = None;
            app.toggle_fold();
            true
        }
        ('g', 'g') => {
            app.pending_key = None;
            app.move_top();
            true
        }
        ('z', 'z') => true,
        _ => {
            app.pending_key = None;
            false
        }
    }
}
