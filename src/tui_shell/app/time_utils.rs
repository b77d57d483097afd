use super::*;

fn ts_ui_format() -> Option<&'static [FormatItem<'static>]> {
    static FMT: OnceLock<Option<Vec<FormatItem<'static>>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .ok()
    })
    .as_deref()
}

fn fmt_ts_abs(ts: &str) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    dt.format(ts_ui_format()?).ok()
}

/// Relative age for recent timestamps; `None` past two weeks or for
/// anything that does not parse.
pub(in crate::tui_shell) fn fmt_since(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    let secs = (now - dt).whole_seconds();
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 48 {
        format!("{hours}h ago")
    } else if days < 14 {
        format!("{days}d ago")
    } else {
        return None;
    };
    Some(s)
}

pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    fmt_ts_abs(ts).unwrap_or_else(|| ts.to_string())
}

/// Relative when recent, absolute otherwise; empty stays empty.
pub(in crate::tui_shell) fn fmt_ts_list(ts: &str, now: OffsetDateTime) -> String {
    if ts.is_empty() {
        return String::new();
    }
    fmt_since(ts, now).unwrap_or_else(|| fmt_ts_ui(ts))
}

#[cfg(test)]
#[path = "../../tests/tui_shell/time_utils_tests.rs"]
mod tests;
