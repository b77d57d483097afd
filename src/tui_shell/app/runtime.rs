use std::io::{self, IsTerminal};

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::settings::Settings;
use crate::store::FileStore;
use crate::tmux::{CommandClient, RuntimeCoordinator};

use super::{App, AppDeps, Arc, Result, event_loop, info};

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let settings_path = opts.paths.settings_file();
    let settings = Settings::load(&settings_path).context("load settings")?;
    let store = FileStore::open(&opts.paths.state_dir);
    info!(store = %store.path().display(), "starting dashboard");

    let mut app = App::new(AppDeps {
        store: Box::new(store),
        tmux: Arc::new(RuntimeCoordinator::new(CommandClient)),
        settings,
        settings_path: Some(settings_path),
    });

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}
