use anyhow::Result;

use crate::settings::Paths;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub paths: Paths,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
