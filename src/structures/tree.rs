use std::collections::VecDeque;

use super::{NodeId, Value};

/// One tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeNode {
	/// Payload.
	pub value: Value,
	/// Left child.
	pub left: Option<NodeId>,
	/// Right child.
	pub right: Option<NodeId>,
}

impl TreeNode {
	fn leaf(value: Value) -> Self {
		Self {
			value,
			left: None,
			right: None,
		}
	}
}

/// Binary tree stored as an arena. Every node except the root is owned by
/// exactly one parent slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryTree {
	nodes: Vec<TreeNode>,
	root: Option<NodeId>,
}

impl BinaryTree {
	/// An empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// A tree holding a single root node.
	pub fn with_root(value: Value) -> Self {
		Self {
			nodes: vec![TreeNode::leaf(value)],
			root: Some(0),
		}
	}

	/// Build from level-order slots where `None` marks an absent child.
	///
	/// Each dequeued parent consumes two slots, left then right. An empty
	/// slice or a missing first slot yields an empty tree.
	pub fn from_level_order(slots: &[Option<Value>]) -> Self {
		let Some(Some(root_value)) = slots.first() else {
			return Self::new();
		};
		let mut tree = Self::with_root(*root_value);
		let mut queue = VecDeque::from([0]);
		let mut rest = slots[1..].iter();

		while let Some(parent) = queue.pop_front() {
			let Some(left) = rest.next() else { break };
			if let Some(value) = left {
				queue.push_back(tree.add_left(parent, *value));
			}
			let Some(right) = rest.next() else { break };
			if let Some(value) = right {
				queue.push_back(tree.add_right(parent, *value));
			}
		}
		tree
	}

	/// Attach a new left child under `parent`, replacing any previous link.
	pub fn add_left(&mut self, parent: NodeId, value: Value) -> NodeId {
		let id = self.push(value);
		self.nodes[parent].left = Some(id);
		id
	}

	/// Attach a new right child under `parent`, replacing any previous link.
	pub fn add_right(&mut self, parent: NodeId, value: Value) -> NodeId {
		let id = self.push(value);
		self.nodes[parent].right = Some(id);
		id
	}

	fn push(&mut self, value: Value) -> NodeId {
		self.nodes.push(TreeNode::leaf(value));
		self.nodes.len() - 1
	}

	/// Root node, `None` when empty.
	pub fn root(&self) -> Option<NodeId> {
		self.root
	}

	/// Node `id`. Panics if `id` is not in this tree.
	pub fn node(&self, id: NodeId) -> &TreeNode {
		&self.nodes[id]
	}

	/// Payload of node `id`.
	pub fn value(&self, id: NodeId) -> Value {
		self.nodes[id].value
	}

	/// Left child of node `id`.
	pub fn left(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id].left
	}

	/// Right child of node `id`.
	pub fn right(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id].right
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the tree has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Number of levels; zero for an empty tree.
	pub fn depth(&self) -> usize {
		let mut level: VecDeque<NodeId> = self.root.into_iter().collect();
		let mut depth = 0;
		while !level.is_empty() {
			depth += 1;
			for _ in 0..level.len() {
				let Some(id) = level.pop_front() else { break };
				level.extend(self.left(id));
				level.extend(self.right(id));
			}
		}
		depth
	}

	/// Level-order slots with `None` for each absent child of a present node,
	/// trailing `None`s trimmed.
	pub fn to_level_order(&self) -> Vec<Option<Value>> {
		let mut slots = Vec::new();
		let Some(root) = self.root else {
			return slots;
		};
		let mut queue = VecDeque::from([Some(root)]);
		while let Some(slot) = queue.pop_front() {
			match slot {
				Some(id) => {
					slots.push(Some(self.value(id)));
					queue.push_back(self.left(id));
					queue.push_back(self.right(id));
				}
				None => slots.push(None),
			}
		}
		while slots.last() == Some(&None) {
			slots.pop();
		}
		slots
	}

	/// Comma-separated level-order encoding, e.g. `1,null,2,3`.
	pub fn to_level_order_string(&self) -> String {
		self.to_level_order()
			.iter()
			.map(|slot| slot.map_or_else(|| "null".to_string(), |v| v.to_string()))
			.collect::<Vec<_>>()
			.join(",")
	}
}
