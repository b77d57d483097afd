//! tmux integration: display-name caches and pane navigation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::error::TmuxError;
use crate::search::NameMaps;

mod client;

pub use client::{CommandClient, TmuxClient};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Session,
    Window,
    Pane,
}

/// Shared between the UI thread and background jump jobs.
///
/// Names are loaded on first use. A miss reloads all three maps once and the
/// maps are swapped in whole under the write lock; readers only ever see a
/// complete snapshot.
pub struct RuntimeCoordinator {
    client: Box<dyn TmuxClient>,
    names: RwLock<Option<NameMaps>>,
}

impl RuntimeCoordinator {
    pub fn new(client: impl TmuxClient + 'static) -> Self {
        Self {
            client: Box::new(client),
            names: RwLock::new(None),
        }
    }

    pub fn ensure_running(&self) -> Result<(), TmuxError> {
        match self.client.run(&["has-session"]) {
            Ok(_) => Ok(()),
            Err(TmuxError::Spawn(err)) => Err(TmuxError::Spawn(err)),
            Err(err) => {
                debug!(%err, "has-session failed");
                Err(TmuxError::NotRunning)
            }
        }
    }

    /// Reloads every name map and replaces the cached ones.
    pub fn refresh_names(&self) -> Result<(), TmuxError> {
        let maps = NameMaps {
            sessions: self.list(&["list-sessions", "-F", "#{session_id}\t#{session_name}"])?,
            windows: self.list(&["list-windows", "-a", "-F", "#{window_id}\t#{window_name}"])?,
            panes: self.list(&["list-panes", "-a", "-F", "#{pane_id}\t#{pane_title}"])?,
        };
        debug!(
            sessions = maps.sessions.len(),
            windows = maps.windows.len(),
            panes = maps.panes.len(),
            "refreshed tmux names"
        );
        *self.names.write().unwrap_or_else(PoisonError::into_inner) = Some(maps);
        Ok(())
    }

    fn list(&self, args: &[&str]) -> Result<HashMap<String, String>, TmuxError> {
        let out = self.client.run(args)?;
        Ok(parse_name_list(&out))
    }

    fn cached(&self, kind: NameKind, id: &str) -> Option<Option<String>> {
        let guard = self.names.read().unwrap_or_else(PoisonError::into_inner);
        let maps = guard.as_ref()?;
        let map = match kind {
            NameKind::Session => &maps.sessions,
            NameKind::Window => &maps.windows,
            NameKind::Pane => &maps.panes,
        };
        Some(map.get(id).cloned())
    }

    /// Display name for a tmux id; the raw id when it cannot be resolved.
    pub fn name(&self, kind: NameKind, id: &str) -> String {
        if id.is_empty() {
            return String::new();
        }
        if let Some(Some(name)) = self.cached(kind, id) {
            return name;
        }
        if let Err(err) = self.refresh_names() {
            warn!(%err, id, "could not resolve tmux name");
            return id.to_string();
        }
        match self.cached(kind, id) {
            Some(Some(name)) => name,
            _ => id.to_string(),
        }
    }

    /// Loads the maps once. A failed load caches an empty snapshot so callers
    /// on the render path do not retry on every frame.
    fn ensure_loaded(&self) {
        if self
            .names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
        {
            return;
        }
        if let Err(err) = self.refresh_names() {
            warn!(%err, "tmux names unavailable");
            *self.names.write().unwrap_or_else(PoisonError::into_inner) =
                Some(NameMaps::default());
        }
    }

    /// Snapshot of the name maps for search, loading them if needed.
    pub fn name_maps(&self) -> NameMaps {
        self.ensure_loaded();
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Cache-only lookup for rendering: never refreshes on a miss.
    pub fn display_name(&self, kind: NameKind, id: &str) -> String {
        if id.is_empty() {
            return String::new();
        }
        self.ensure_loaded();
        match self.cached(kind, id) {
            Some(Some(name)) if !name.is_empty() => name,
            _ => id.to_string(),
        }
    }

    /// Switches the client to `session` and selects `window`, then `pane`.
    /// A pane that no longer exists falls back to the window.
    pub fn jump_to_pane(&self, session: &str, window: &str, pane: &str) -> Result<(), TmuxError> {
        if pane.is_empty() {
            return self.jump_to_window(session, window);
        }
        if session.is_empty() || window.is_empty() {
            return Err(TmuxError::MissingTarget);
        }
        let target_window = format!("{session}:{window}");
        let pane_exists = self
            .client
            .run(&["list-panes", "-t", &target_window, "-F", "#{pane_id}"])
            .map(|out| out.lines().any(|l| l.trim() == pane))
            .unwrap_or(false);

        self.client.run(&["switch-client", "-t", session])?;
        self.client.run(&["select-window", "-t", &target_window])?;
        if !pane_exists {
            warn!(pane, window = %target_window, "pane is gone, jumped to window");
            return Ok(());
        }
        let target_pane = format!("{target_window}.{pane}");
        self.client.run(&["select-pane", "-t", &target_pane])?;
        info!(target = %target_pane, "jumped to pane");
        Ok(())
    }

    pub fn jump_to_window(&self, session: &str, window: &str) -> Result<(), TmuxError> {
        if session.is_empty() || window.is_empty() {
            return Err(TmuxError::MissingTarget);
        }
        let target_window = format!("{session}:{window}");
        self.client.run(&["switch-client", "-t", session])?;
        self.client.run(&["select-window", "-t", &target_window])?;
        info!(target = %target_window, "jumped to window");
        Ok(())
    }
}

impl std::fmt::Debug for RuntimeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self
            .names
            .read()
            .map(|n| n.is_some())
            .unwrap_or(false);
        f.debug_struct("RuntimeCoordinator")
            .field("names_loaded", &loaded)
            .finish()
    }
}

/// `id<TAB>name` lines; lines without a tab are ignored.
fn parse_name_list(out: &str) -> HashMap<String, String> {
    out.lines()
        .filter_map(|line| {
            let (id, name) = line.split_once('\t')?;
            let id = id.trim();
            if id.is_empty() {
                return None;
            }
            Some((id.to_string(), name.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/tmux_tests.rs"]
mod tests;
