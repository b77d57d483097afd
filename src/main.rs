use anyhow::Result;
use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open the dashboard (same as running without a subcommand)
    Tui,

    /// Record a new notification
    Add {
        /// Notification text
        message: String,
        /// tmux session id (e.g. $1)
        #[arg(long, default_value = "")]
        session: String,
        /// tmux window id (e.g. @3)
        #[arg(long, default_value = "")]
        window: String,
        /// tmux pane id (e.g. %7)
        #[arg(long, default_value = "")]
        pane: String,
        /// Pane creation time, if known
        #[arg(long, default_value = "")]
        pane_created: String,
        /// Severity tag
        #[arg(long, default_value = "info", value_parser = ["info", "warning", "error", "critical"])]
        level: String,
    },

    /// List notifications, newest first
    List {
        /// Include dismissed notifications
        #[arg(long)]
        all: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Dismiss a notification
    Dismiss { id: u64 },

    /// Mark a notification as read
    MarkRead { id: u64 },

    /// Mark a notification as unread
    MarkUnread { id: u64 },

    /// Show or reset dashboard settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Print the current settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore defaults and forget every stored fold
    Reset,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    cli_runtime::run()
}
