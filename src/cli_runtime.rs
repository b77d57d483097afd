use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use intray::logging::init_tracing;
use intray::settings::Paths;

use crate::Commands;

#[derive(Parser)]
#[command(name = "intray")]
#[command(about = "Notification inbox for tmux", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding notifications.tsv and the log file
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Directory holding settings.json
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write logs here instead of the state directory
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.config_dir, cli.state_dir);
    let log_file = cli.log_file.unwrap_or_else(|| paths.log_file());
    init_tracing(&log_file).context("init logging")?;

    match cli.command {
        None => {
            intray::tui::run_with_options(intray::tui::TuiRunOptions { paths })?;
        }
        Some(command) => crate::cli_exec::handle_command(&paths, command)?,
    }

    Ok(())
}
