use anyhow::Result;

mod app;
mod commands;
mod input;
mod modal;
mod suggest;
mod view;
mod views;

use app::{App, CommandDef, Modal, fmt_ts_list};
use view::RenderCtx;

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
