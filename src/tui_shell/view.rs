use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

use crate::tmux::{NameKind, RuntimeCoordinator};

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx<'a> {
    pub(super) now: OffsetDateTime,
    pub(super) tmux: &'a RuntimeCoordinator,
}

impl RenderCtx<'_> {
    /// Display name from the cached tmux maps; the raw id if unknown.
    pub(super) fn name(&self, kind: NameKind, id: &str) -> String {
        self.tmux.display_name(kind, id)
    }
}

pub(super) fn render_view_chrome(frame: &mut ratatui::Frame, header: Line<'_>, area: Rect) -> Rect {
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
