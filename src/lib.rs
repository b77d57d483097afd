pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod settings;
pub mod store;
pub mod tmux;
pub mod tree;
pub mod tui;

mod tui_shell;
