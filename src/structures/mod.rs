//! Arena-backed data structures shared by the catalog, parsers and trace generators.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`], so a
//! structure can be cloned into a signal or compared without chasing owned
//! pointers.

mod list;
mod tree;

pub use list::{LinkedList, ListNode};
pub use tree::{BinaryTree, TreeNode};

/// Element and node payload.
pub type Value = i32;

/// Index of a node inside its owning arena.
pub type NodeId = usize;
