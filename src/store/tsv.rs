//! Line codec for `notifications.tsv`.
//!
//! Columns: id, timestamp, state, session, window, pane, message,
//! pane_created, level, read_timestamp. Older files omit the last column.

use crate::error::StorageError;
use crate::model::{Notification, NotificationState};

const NUM_FIELDS: usize = 10;
const MIN_FIELDS: usize = NUM_FIELDS - 1;

pub(super) fn encode_line(n: &Notification) -> String {
    [
        n.id.to_string(),
        n.timestamp.clone(),
        n.state.as_str().to_string(),
        escape_field(&n.session),
        escape_field(&n.window),
        escape_field(&n.pane),
        escape_field(&n.message),
        escape_field(&n.pane_created),
        escape_field(&n.level),
        n.read_timestamp.clone(),
    ]
    .join("\t")
}

pub(super) fn parse_line(line: &str, line_no: usize) -> Result<Notification, StorageError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS || fields.len() > NUM_FIELDS {
        return Err(StorageError::Malformed {
            line: line_no,
            reason: format!("expected {MIN_FIELDS} or {NUM_FIELDS} fields, got {}", fields.len()),
        });
    }

    let id = fields[0]
        .trim()
        .parse::<u64>()
        .map_err(|_| StorageError::Malformed {
            line: line_no,
            reason: format!("invalid id {:?}", fields[0]),
        })?;
    let state = match fields[2] {
        "active" => NotificationState::Active,
        "dismissed" => NotificationState::Dismissed,
        other => {
            return Err(StorageError::Malformed {
                line: line_no,
                reason: format!("unknown state {other:?}"),
            });
        }
    };

    Ok(Notification {
        id,
        timestamp: fields[1].to_string(),
        state,
        session: unescape_field(fields[3]),
        window: unescape_field(fields[4]),
        pane: unescape_field(fields[5]),
        message: unescape_field(fields[6]),
        pane_created: unescape_field(fields[7]),
        level: unescape_field(fields[8]),
        read_timestamp: fields.get(9).map(|s| s.to_string()).unwrap_or_default(),
    })
}

fn escape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

fn unescape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
