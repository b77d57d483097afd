use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info, warn};

use crate::model::{GroupBy, Notification, Tab, ViewMode};
use crate::search::{self, TokenSearch};
use crate::settings::Settings;
use crate::store::NotificationSource;
use crate::tmux::{NameKind, RuntimeCoordinator};
use crate::tree::{FoldController, NodeKind, TreeNode};

use super::commands::{command_defs, find_command};
use super::input::Input;
use super::modal;
use super::suggest::rank_commands;
use super::view::{RenderCtx, render_view_chrome};

mod actions;
mod cmd_dispatch;
mod event_loop;
mod filter;
mod jobs;
mod log_types;
mod modal_output;
mod modal_types;
mod render;
mod runtime;
mod time_utils;

pub(super) use self::log_types::CommandDef;
use self::log_types::{JobResult, JumpTarget, StatusLevel, StatusLine};
pub(super) use self::modal_types::{Modal, PendingAction};
pub(super) use self::runtime::run;
pub(super) use self::time_utils::fmt_ts_list;

/// Errors and warnings disappear after this long.
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(5);

/// Collaborators handed to the dashboard.
pub(super) struct AppDeps {
    pub(super) store: Box<dyn NotificationSource>,
    pub(super) tmux: Arc<RuntimeCoordinator>,
    pub(super) settings: Settings,
    /// `None` keeps settings in memory only.
    pub(super) settings_path: Option<PathBuf>,
}

pub(super) struct App {
    store: Box<dyn NotificationSource>,
    tmux: Arc<RuntimeCoordinator>,

    settings: Settings,
    settings_path: Option<PathBuf>,

    // Active notifications, newest first, and the subset that passes the
    // tab, read and search filters.
    notifications: Vec<Notification>,
    filtered: Vec<Notification>,

    fold: FoldController,
    list_cursor: usize,

    search_mode: bool,
    search: Input,

    pending_key: Option<char>,
    show_help: bool,
    modal: Option<Modal>,
    command_history: Vec<String>,

    status: Option<StatusLine>,
    status_seq: u64,

    // Bumped whenever the notification set or the filter changes.
    generation: u64,
    jobs_tx: Sender<JobResult>,
    jobs_rx: Receiver<JobResult>,
    jump_in_flight: bool,

    quit: bool,
}

impl App {
    pub(super) fn new(deps: AppDeps) -> Self {
        let (jobs_tx, jobs_rx) = mpsc::channel();
        let search_mode = deps.settings.view_mode == ViewMode::Search;
        let mut app = Self {
            store: deps.store,
            tmux: deps.tmux,
            settings: deps.settings,
            settings_path: deps.settings_path,
            notifications: Vec::new(),
            filtered: Vec::new(),
            fold: FoldController::new(),
            list_cursor: 0,
            search_mode,
            search: Input::default(),
            pending_key: None,
            show_help: false,
            modal: None,
            command_history: Vec::new(),
            status: None,
            status_seq: 0,
            generation: 0,
            jobs_tx,
            jobs_rx,
            jump_in_flight: false,
            quit: false,
        };
        app.reload(false);
        app
    }

    pub(super) fn view_mode(&self) -> ViewMode {
        self.settings.view_mode
    }

    pub(super) fn group_by(&self) -> GroupBy {
        self.settings.group_by
    }

    pub(super) fn is_grouped_view(&self) -> bool {
        self.settings.view_mode == ViewMode::Grouped
    }

    pub(super) fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(super) fn take_modal(&mut self) -> Option<Modal> {
        self.modal.take()
    }

    pub(super) fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
