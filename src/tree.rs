//! Grouping tree for the dashboard.
//!
//! Trees are rebuilt wholesale whenever the notification set or the filter
//! changes; expansion state and the cursor survive through string identifiers.

mod build;
mod expansion;
mod fold;
mod ident;
mod node;
mod visible;

pub use build::{build_tree, build_tree_with, prune_empty_groups, rebuild_tree_for_filter};
pub use expansion::ExpansionStore;
pub use fold::{FoldController, MAX_EXPAND_LEVEL, MIN_EXPAND_LEVEL};
pub use ident::{ROOT_ID, group_key, legacy_group_key, node_id, notification_id};
pub use node::{NodeKind, TreeNode};
pub use visible::{NotificationTree, VisibleRow, compute_visible};

#[cfg(test)]
#[path = "tests/tree/build_tests.rs"]
mod build_tests;
