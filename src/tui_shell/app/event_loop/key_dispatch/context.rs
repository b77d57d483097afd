use super::*;

/// Which input policy applies to the next key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum InputContext {
    Normal,
    /// Search view showing, not typing.
    SearchView,
    /// Typing a query.
    SearchInput,
}

impl InputContext {
    pub(super) fn of(app: &App) -> Self {
        if app.search_mode {
            InputContext::SearchInput
        } else if app.view_mode() == ViewMode::Search {
            InputContext::SearchView
        } else {
            InputContext::Normal
        }
    }

    pub(super) fn allow_bindings(self) -> bool {
        match self {
            InputContext::Normal | InputContext::SearchView => true,
            InputContext::SearchInput => false,
        }
    }

    /// Ctrl+<letter> acts as the bare letter's binding.
    pub(super) fn ctrl_falls_back(self) -> bool {
        match self {
            InputContext::Normal => false,
            InputContext::SearchView | InputContext::SearchInput => true,
        }
    }

    pub(super) fn is_search(self) -> bool {
        self != InputContext::Normal
    }
}

/// The binding character a key maps to in `ctx`, and whether bindings may
/// fire for it. Ctrl chords map only where the context falls back.
pub(super) fn binding_key(ctx: InputContext, key: &KeyEvent) -> Option<(char, bool)> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if !ctx.ctrl_falls_back() {
            return None;
        }
        return Some((c.to_ascii_lowercase(), true));
    }
    Some((c, ctx.allow_bindings()))
}
