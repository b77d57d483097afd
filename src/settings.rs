//! Persisted dashboard preferences and on-disk locations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StorageError, ValidationError};
use crate::model::{GroupBy, ReadFilter, Tab, ViewMode};
use crate::store::write_atomic;
use crate::tree::{ExpansionStore, MAX_EXPAND_LEVEL, MIN_EXPAND_LEVEL};

const APP_DIR: &str = "intray";
const SETTINGS_FILE: &str = "settings.json";
const LOG_FILE: &str = "intray.log";

pub const DEFAULT_EXPAND_LEVEL: u8 = 1;

/// Resolved config/state directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Paths {
    /// Explicit overrides win, then the XDG variables, then `~/.config` and
    /// `~/.local/state`.
    pub fn resolve(config_dir: Option<PathBuf>, state_dir: Option<PathBuf>) -> Self {
        let config_dir =
            config_dir.unwrap_or_else(|| xdg_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR));
        let state_dir = state_dir
            .unwrap_or_else(|| xdg_dir("XDG_STATE_HOME", &[".local", "state"]).join(APP_DIR));
        Self {
            config_dir,
            state_dir,
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE)
    }
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    let mut home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    for part in fallback {
        home.push(part);
    }
    home
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view_mode: ViewMode,
    pub group_by: GroupBy,
    pub default_expand_level: u8,
    pub expansion_state: ExpansionStore,
    pub active_tab: Tab,
    pub read_filter: ReadFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grouped,
            group_by: GroupBy::Pane,
            default_expand_level: DEFAULT_EXPAND_LEVEL,
            expansion_state: ExpansionStore::new(),
            active_tab: Tab::Recents,
            read_filter: ReadFilter::All,
        }
    }
}

impl Settings {
    /// Reads `path`. A missing file gives defaults; so does one that cannot be
    /// parsed, after logging a warning.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let raw = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(StorageError::io("read", path, err)),
        };

        let mut settings: Settings = match serde_json::from_str(&raw) {
            Ok(s) => s,
            Err(err) => {
                warn!(path = %path.display(), %err, "corrupt settings file, using defaults");
                return Ok(Self::default());
            }
        };
        settings.normalize();
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let mut body = serde_json::to_string_pretty(self).map_err(|e| {
            StorageError::io("encode", path, std::io::Error::other(e))
        })?;
        body.push('\n');
        write_atomic(path, body.as_bytes())?;
        debug!(path = %path.display(), entries = self.expansion_state.len(), "saved settings");
        Ok(())
    }

    fn normalize(&mut self) {
        if self.default_expand_level > MAX_EXPAND_LEVEL {
            warn!(
                value = self.default_expand_level,
                "stored expand level out of range, using default"
            );
            self.default_expand_level = DEFAULT_EXPAND_LEVEL;
        }
    }

    pub fn set_group_by(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.group_by = raw.parse()?;
        Ok(())
    }

    pub fn set_expand_level(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.default_expand_level = parse_expand_level(raw)?;
        Ok(())
    }

    pub fn set_read_filter(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.read_filter = raw.parse()?;
        Ok(())
    }

    pub fn set_tab(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.active_tab = raw.parse()?;
        Ok(())
    }

    pub fn set_view_mode(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.view_mode = raw.parse()?;
        Ok(())
    }
}

pub fn parse_expand_level(raw: &str) -> Result<u8, ValidationError> {
    let err = || ValidationError::ExpandLevel {
        value: raw.to_string(),
        min: MIN_EXPAND_LEVEL,
        max: MAX_EXPAND_LEVEL,
    };
    let level: u8 = raw.trim().parse().map_err(|_| err())?;
    if !(MIN_EXPAND_LEVEL..=MAX_EXPAND_LEVEL).contains(&level) {
        return Err(err());
    }
    Ok(level)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
