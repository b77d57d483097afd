mod list;
mod tree;

pub(in crate::tui_shell) use list::render_list;
pub(in crate::tui_shell) use tree::render_tree;
