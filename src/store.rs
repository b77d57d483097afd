use std::fs;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::error::StorageError;
use crate::model::{Notification, NotificationState};

mod tsv;

const NOTIFICATIONS_FILE: &str = "notifications.tsv";

/// Where the dashboard reads notifications from and sends mutations to.
pub trait NotificationSource {
    /// Active notifications, newest first.
    fn load_active(&self) -> Result<Vec<Notification>, StorageError>;
    fn dismiss(&self, id: u64) -> Result<(), StorageError>;
    /// Dismisses every active notification matching the scope; empty parts match anything.
    fn dismiss_by_filter(
        &self,
        session: &str,
        window: &str,
        pane: &str,
    ) -> Result<usize, StorageError>;
    /// Dismisses exactly `ids`; ids that are unknown or already dismissed are skipped.
    fn dismiss_ids(&self, ids: &[u64]) -> Result<usize, StorageError>;
    fn mark_read(&self, id: u64) -> Result<(), StorageError>;
    fn mark_unread(&self, id: u64) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct NewNotification {
    pub message: String,
    pub session: String,
    pub window: String,
    pub pane: String,
    pub pane_created: String,
    pub level: String,
}

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(NOTIFICATIONS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record on disk, in file order. Malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<Notification>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::io("read", &self.path, err)),
        };

        let mut out = Vec::new();
        for (i, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match tsv::parse_line(line, i + 1) {
                Ok(n) => out.push(n),
                Err(err) => warn!(path = %self.path.display(), %err, "skipping record"),
            }
        }
        Ok(out)
    }

    fn write_all(&self, records: &[Notification]) -> Result<(), StorageError> {
        let mut body = String::new();
        for n in records {
            body.push_str(&tsv::encode_line(n));
            body.push('\n');
        }
        write_atomic(&self.path, body.as_bytes())
    }

    /// Listing for the CLI; newest first.
    pub fn list(&self, include_dismissed: bool) -> Result<Vec<Notification>, StorageError> {
        let mut all = self.read_all()?;
        if !include_dismissed {
            all.retain(|n| n.state == NotificationState::Active);
        }
        sort_newest_first(&mut all);
        Ok(all)
    }

    pub fn add(&self, new: NewNotification) -> Result<u64, StorageError> {
        let mut all = self.read_all()?;
        let id = all.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        all.push(Notification {
            id,
            timestamp: now_rfc3339(),
            state: NotificationState::Active,
            session: new.session,
            window: new.window,
            pane: new.pane,
            message: new.message,
            pane_created: new.pane_created,
            level: new.level,
            read_timestamp: String::new(),
        });
        self.write_all(&all)?;
        info!(id, "added notification");
        Ok(id)
    }

    fn update_one(
        &self,
        id: u64,
        f: impl FnOnce(&mut Notification),
    ) -> Result<(), StorageError> {
        let mut all = self.read_all()?;
        let Some(n) = all
            .iter_mut()
            .find(|n| n.id == id && n.state == NotificationState::Active)
        else {
            return Err(StorageError::NotFound(id));
        };
        f(n);
        self.write_all(&all)
    }
}

impl NotificationSource for FileStore {
    fn load_active(&self) -> Result<Vec<Notification>, StorageError> {
        self.list(false)
    }

    fn dismiss(&self, id: u64) -> Result<(), StorageError> {
        self.update_one(id, |n| n.state = NotificationState::Dismissed)?;
        info!(id, "dismissed notification");
        Ok(())
    }

    fn dismiss_by_filter(
        &self,
        session: &str,
        window: &str,
        pane: &str,
    ) -> Result<usize, StorageError> {
        let mut all = self.read_all()?;
        let mut count = 0;
        for n in all.iter_mut() {
            if n.state != NotificationState::Active {
                continue;
            }
            let hit = (session.is_empty() || n.session == session)
                && (window.is_empty() || n.window == window)
                && (pane.is_empty() || n.pane == pane);
            if hit {
                n.state = NotificationState::Dismissed;
                count += 1;
            }
        }
        if count > 0 {
            self.write_all(&all)?;
        }
        info!(session, window, pane, count, "dismissed by filter");
        Ok(count)
    }

    fn dismiss_ids(&self, ids: &[u64]) -> Result<usize, StorageError> {
        let mut all = self.read_all()?;
        let mut count = 0;
        for n in all.iter_mut() {
            if n.state == NotificationState::Active && ids.contains(&n.id) {
                n.state = NotificationState::Dismissed;
                count += 1;
            }
        }
        if count > 0 {
            self.write_all(&all)?;
        }
        info!(requested = ids.len(), count, "dismissed by id");
        Ok(count)
    }

    fn mark_read(&self, id: u64) -> Result<(), StorageError> {
        let ts = now_rfc3339();
        self.update_one(id, |n| n.read_timestamp = ts)
    }

    fn mark_unread(&self, id: u64) -> Result<(), StorageError> {
        self.update_one(id, |n| n.read_timestamp.clear())
    }
}

pub fn sort_newest_first(items: &mut [Notification]) {
    items.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
}

pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .replace_nanosecond(0)
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&Rfc3339)
        .unwrap_or_default()
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io("create dir", parent, e))?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).map_err(|e| StorageError::io("write", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StorageError::io("rename", path, e))?;
    Ok(())
}
