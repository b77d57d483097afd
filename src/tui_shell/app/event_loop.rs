use std::io;

use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

mod key_dispatch;

pub(super) use self::key_dispatch::handle_key;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_jobs();
        app.expire_status(Instant::now());

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    handle_key(app, k);
                }
                _ => {}
            }
        }
    }
}
