use std::collections::HashMap;

use crate::model::Notification;

pub trait SearchProvider {
    fn matches(&self, n: &Notification, query: &str) -> bool;
}

/// Display names used so a query can match `main` for session `$1`.
#[derive(Clone, Debug, Default)]
pub struct NameMaps {
    pub sessions: HashMap<String, String>,
    pub windows: HashMap<String, String>,
    pub panes: HashMap<String, String>,
}

/// Whitespace-separated, case-insensitive token matching.
///
/// Every text token has to appear in at least one field. The bare tokens
/// `read` and `unread` filter by read state instead; giving both cancels them.
#[derive(Clone, Debug, Default)]
pub struct TokenSearch {
    names: NameMaps,
}

impl TokenSearch {
    pub fn new(names: NameMaps) -> Self {
        Self { names }
    }

    fn fields<'a>(&'a self, n: &'a Notification) -> [&'a str; 8] {
        let name = |map: &'a HashMap<String, String>, id: &str| -> &'a str {
            map.get(id).map(String::as_str).unwrap_or("")
        };
        [
            n.message.as_str(),
            n.session.as_str(),
            n.window.as_str(),
            n.pane.as_str(),
            n.level.as_str(),
            name(&self.names.sessions, &n.session),
            name(&self.names.windows, &n.window),
            name(&self.names.panes, &n.pane),
        ]
    }
}

impl SearchProvider for TokenSearch {
    fn matches(&self, n: &Notification, query: &str) -> bool {
        let mut want_read = false;
        let mut want_unread = false;
        let mut tokens = Vec::new();
        for tok in query.split_whitespace() {
            let lower = tok.to_lowercase();
            match lower.as_str() {
                "read" => want_read = true,
                "unread" => want_unread = true,
                _ => tokens.push(lower),
            }
        }
        if want_read && want_unread {
            want_read = false;
            want_unread = false;
        }
        if (want_read && !n.is_read()) || (want_unread && n.is_read()) {
            return false;
        }

        let fields = self.fields(n);
        tokens.iter().all(|tok| {
            fields
                .iter()
                .filter(|f| !f.is_empty())
                .any(|f| f.to_lowercase().contains(tok.as_str()))
        })
    }
}

/// Applies `provider` to every notification. A blank query keeps everything
/// and never reaches the provider.
pub fn filter<'a, P: SearchProvider + ?Sized>(
    provider: &P,
    items: impl IntoIterator<Item = &'a Notification>,
    query: &str,
) -> Vec<Notification> {
    let query = query.trim();
    if query.is_empty() {
        return items.into_iter().cloned().collect();
    }
    items
        .into_iter()
        .filter(|n| provider.matches(n, query))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
