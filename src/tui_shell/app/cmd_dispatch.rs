use super::*;

impl App {
    pub(in crate::tui_shell) fn recompute_suggestions(&mut self) {
        let Some(Modal::CommandLine {
            input,
            suggestions,
            selected,
        }) = self.modal.as_mut()
        else {
            return;
        };
        *suggestions = rank_commands(&input.buf, command_defs());
        *selected = (*selected).min(suggestions.len().saturating_sub(1));
    }

    /// Tab: replaces the typed command name with the selected suggestion,
    /// keeping any arguments.
    pub(in crate::tui_shell) fn complete_command(&mut self) {
        let Some(Modal::CommandLine {
            input,
            suggestions,
            selected,
        }) = self.modal.as_mut()
        else {
            return;
        };
        let Some(def) = suggestions.get(*selected) else {
            return;
        };
        let rest = input
            .buf
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim_start().to_string())
            .unwrap_or_default();
        input.set(format!("{} {}", def.name, rest));
        self.recompute_suggestions();
    }

    pub(in crate::tui_shell) fn run_command_line(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return;
        };
        let args: Vec<&str> = parts.collect();
        let Some(def) = find_command(name) else {
            self.push_warning(format!("Unknown command: {name}"));
            return;
        };
        debug!(command = def.name, ?args, "running command");

        match def.name {
            "q" => self.quit_with_save(),
            "w" => {
                if self.save_settings() {
                    self.push_info("Settings saved");
                }
            }
            "toggle-view" => self.cycle_view_mode(),
            "group-by" => {
                let Some(raw) = single_arg(&args) else {
                    self.push_warning(format!("usage: {}", def.usage));
                    return;
                };
                if let Err(err) = self.settings.set_group_by(raw) {
                    self.push_warning(err.to_string());
                    return;
                }
                self.apply_filters(false);
                self.save_settings();
                self.push_info(format!("Group by: {}", self.settings.group_by));
            }
            "expand-level" => {
                let Some(raw) = single_arg(&args) else {
                    self.push_warning(format!("usage: {}", def.usage));
                    return;
                };
                if let Err(err) = self.settings.set_expand_level(raw) {
                    self.push_warning(err.to_string());
                    return;
                }
                let level = self.settings.default_expand_level;
                self.fold
                    .apply_default_expansion(&mut self.settings.expansion_state, level);
                self.save_settings();
                self.push_info(format!("Expand level: {level}"));
            }
            "read-filter" => {
                let Some(raw) = single_arg(&args) else {
                    self.push_warning(format!("usage: {}", def.usage));
                    return;
                };
                if let Err(err) = self.settings.set_read_filter(raw) {
                    self.push_warning(err.to_string());
                    return;
                }
                self.apply_filters(false);
                self.save_settings();
                self.push_info(format!("Read filter: {}", self.settings.read_filter));
            }
            other => self.push_warning(format!("Unknown command: {other}")),
        }
    }
}

fn single_arg<'a>(args: &[&'a str]) -> Option<&'a str> {
    match args {
        [one] => Some(one),
        _ => None,
    }
}
