use super::CommandDef;

const COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "group-by",
        aliases: &["g"],
        usage: "group-by <none|session|window|pane|pane_message>",
        help: "Change tree grouping",
    },
    CommandDef {
        name: "expand-level",
        aliases: &["el"],
        usage: "expand-level <0-3>",
        help: "Set default expansion depth and reapply it",
    },
    CommandDef {
        name: "read-filter",
        aliases: &["rf"],
        usage: "read-filter <all|read|unread>",
        help: "Filter by read state",
    },
    CommandDef {
        name: "toggle-view",
        aliases: &["tv"],
        usage: "toggle-view",
        help: "Cycle compact, detailed, grouped and search views",
    },
    CommandDef {
        name: "w",
        aliases: &["write"],
        usage: "w",
        help: "Save settings",
    },
    CommandDef {
        name: "q",
        aliases: &["quit"],
        usage: "q",
        help: "Save settings and exit",
    },
];

pub(super) fn command_defs() -> &'static [CommandDef] {
    COMMANDS
}

/// Resolves a typed name or alias.
pub(super) fn find_command(name: &str) -> Option<&'static CommandDef> {
    COMMANDS
        .iter()
        .find(|c| c.name == name || c.aliases.contains(&name))
}
