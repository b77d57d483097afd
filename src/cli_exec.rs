use anyhow::{Context, Result};

use intray::model::{Notification, NotificationState};
use intray::settings::{Paths, Settings};
use intray::store::{FileStore, NewNotification, NotificationSource};

use crate::{Commands, SettingsCommands};

pub(crate) fn handle_command(paths: &Paths, command: Commands) -> Result<()> {
    let store = FileStore::open(&paths.state_dir);
    match command {
        Commands::Tui => intray::tui::run_with_options(intray::tui::TuiRunOptions {
            paths: paths.clone(),
        })?,
        Commands::Add {
            message,
            session,
            window,
            pane,
            pane_created,
            level,
        } => {
            let id = store
                .add(NewNotification {
                    message,
                    session,
                    window,
                    pane,
                    pane_created,
                    level,
                })
                .context("add notification")?;
            println!("{}", id);
        }
        Commands::List { all, json } => {
            let items = store.list(all).context("list notifications")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&items).context("serialize notifications json")?
                );
            } else if items.is_empty() {
                println!("No notifications");
            } else {
                for n in &items {
                    println!("{}", list_line(n));
                }
            }
        }
        Commands::Dismiss { id } => {
            store.dismiss(id)?;
            println!("Dismissed {}", id);
        }
        Commands::MarkRead { id } => {
            store.mark_read(id)?;
            println!("Marked {} read", id);
        }
        Commands::MarkUnread { id } => {
            store.mark_unread(id)?;
            println!("Marked {} unread", id);
        }
        Commands::Settings { command } => handle_settings_command(paths, command)?,
    }
    Ok(())
}

fn handle_settings_command(paths: &Paths, command: SettingsCommands) -> Result<()> {
    let path = paths.settings_file();
    match command {
        SettingsCommands::Show { json } => {
            let settings = Settings::load(&path).context("load settings")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&settings).context("serialize settings json")?
                );
            } else {
                println!("file: {}", path.display());
                println!("view_mode: {}", settings.view_mode);
                println!("group_by: {}", settings.group_by);
                println!("default_expand_level: {}", settings.default_expand_level);
                println!("active_tab: {}", settings.active_tab);
                println!("read_filter: {}", settings.read_filter);
                println!("stored folds: {}", settings.expansion_state.len());
            }
        }
        SettingsCommands::Reset => {
            Settings::default()
                .save(&path)
                .context("write default settings")?;
            println!("Settings reset");
        }
    }
    Ok(())
}

fn list_line(n: &Notification) -> String {
    let mark = match (n.state, n.is_read()) {
        (NotificationState::Dismissed, _) => "x",
        (_, false) => "*",
        (_, true) => " ",
    };
    let origin = [n.session.as_str(), n.window.as_str(), n.pane.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":");
    format!(
        "{:>4} {} {} {:<8} {:<12} {}",
        n.id,
        mark,
        n.timestamp,
        n.level_key(),
        origin,
        n.message
    )
}
