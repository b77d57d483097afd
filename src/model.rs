use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    #[default]
    Active,
    Dismissed,
}

impl NotificationState {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationState::Active => "active",
            NotificationState::Dismissed => "dismissed",
        }
    }
}

/// A single event raised from a tmux pane.
///
/// `timestamp` and `read_timestamp` are RFC 3339 strings; they compare
/// lexicographically in chronological order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub timestamp: String,
    pub state: NotificationState,
    pub session: String,
    pub window: String,
    pub pane: String,
    pub message: String,
    #[serde(default)]
    pub pane_created: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub read_timestamp: String,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        !self.read_timestamp.is_empty()
    }

    /// Level used for statistics; an untagged notification counts as `info`.
    pub fn level_key(&self) -> &str {
        if self.level.is_empty() {
            "info"
        } else {
            &self.level
        }
    }
}

/// Grouping depth of the notification tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupBy {
    None,
    Session,
    Window,
    #[default]
    Pane,
    PaneMessage,
}

impl GroupBy {
    pub const ALL: [GroupBy; 5] = [
        GroupBy::None,
        GroupBy::Session,
        GroupBy::Window,
        GroupBy::Pane,
        GroupBy::PaneMessage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Session => "session",
            GroupBy::Window => "window",
            GroupBy::Pane => "pane",
            GroupBy::PaneMessage => "pane_message",
        }
    }

    /// Permissive resolution used while building trees: anything unrecognized
    /// groups by pane.
    pub fn resolve(raw: &str) -> GroupBy {
        raw.parse().unwrap_or(GroupBy::Pane)
    }
}

impl FromStr for GroupBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(GroupBy::None),
            "session" => Ok(GroupBy::Session),
            "window" => Ok(GroupBy::Window),
            "pane" => Ok(GroupBy::Pane),
            "pane_message" | "pane+message" => Ok(GroupBy::PaneMessage),
            _ => Err(ValidationError::GroupBy(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    Compact,
    // Fallback for stored modes that no longer parse.
    #[default]
    Detailed,
    Grouped,
    Search,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Compact => "compact",
            ViewMode::Detailed => "detailed",
            ViewMode::Grouped => "grouped",
            ViewMode::Search => "search",
        }
    }

    /// compact -> detailed -> grouped -> search -> compact
    pub fn next(self) -> ViewMode {
        match self {
            ViewMode::Compact => ViewMode::Detailed,
            ViewMode::Detailed => ViewMode::Grouped,
            ViewMode::Grouped => ViewMode::Search,
            ViewMode::Search => ViewMode::Compact,
        }
    }
}

impl FromStr for ViewMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(ViewMode::Compact),
            "detailed" => Ok(ViewMode::Detailed),
            "grouped" => Ok(ViewMode::Grouped),
            "search" => Ok(ViewMode::Search),
            _ => Err(ValidationError::ViewMode(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Recents,
    All,
}

impl Tab {
    /// Number of newest notifications kept by the recents tab.
    pub const RECENTS_LIMIT: usize = 50;

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Recents => "recents",
            Tab::All => "all",
        }
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recents" => Ok(Tab::Recents),
            "all" => Ok(Tab::All),
            _ => Err(ValidationError::Tab(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadFilter::All => "all",
            ReadFilter::Read => "read",
            ReadFilter::Unread => "unread",
        }
    }

    pub fn matches(self, n: &Notification) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Read => n.is_read(),
            ReadFilter::Unread => !n.is_read(),
        }
    }
}

impl FromStr for ReadFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(ReadFilter::All),
            "read" => Ok(ReadFilter::Read),
            "unread" => Ok(ReadFilter::Unread),
            _ => Err(ValidationError::ReadFilter(s.to_string())),
        }
    }
}

macro_rules! string_serde {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.as_str())
            }
        }

        // Stored values that no longer parse fall back to the default.
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(d)?;
                Ok(raw.parse().unwrap_or_default())
            }
        }
    )*};
}

string_serde!(GroupBy, ViewMode, Tab, ReadFilter);
