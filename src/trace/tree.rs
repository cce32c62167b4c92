//! Binary tree traversals.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::debug;

use super::{Action, Algorithm, Step, UnknownAlgorithm, find_by_name};
use crate::structures::{BinaryTree, NodeId};

/// Traversal orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeAlgorithm {
	/// Left, root, right.
	Inorder,
	/// Root, left, right.
	Preorder,
	/// Left, right, root.
	Postorder,
	/// Level by level.
	Bfs,
}

impl TreeAlgorithm {
	/// Every traversal.
	pub const ALL: [TreeAlgorithm; 4] = [
		TreeAlgorithm::Inorder,
		TreeAlgorithm::Preorder,
		TreeAlgorithm::Postorder,
		TreeAlgorithm::Bfs,
	];
}

impl Algorithm for TreeAlgorithm {
	fn all() -> &'static [Self] {
		&Self::ALL
	}

	fn as_str(self) -> &'static str {
		match self {
			TreeAlgorithm::Inorder => "inorder",
			TreeAlgorithm::Preorder => "preorder",
			TreeAlgorithm::Postorder => "postorder",
			TreeAlgorithm::Bfs => "bfs",
		}
	}

	fn label(self) -> &'static str {
		match self {
			TreeAlgorithm::Inorder => "Inorder",
			TreeAlgorithm::Preorder => "Preorder",
			TreeAlgorithm::Postorder => "Postorder",
			TreeAlgorithm::Bfs => "Level Order (BFS)",
		}
	}
}

impl fmt::Display for TreeAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TreeAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		find_by_name(s)
	}
}

/// Trace of `algorithm` over `tree`.
pub fn generate(algorithm: TreeAlgorithm, tree: &BinaryTree) -> Vec<Step> {
	let steps = match algorithm {
		TreeAlgorithm::Inorder => inorder(tree),
		TreeAlgorithm::Preorder => preorder(tree),
		TreeAlgorithm::Postorder => postorder(tree),
		TreeAlgorithm::Bfs => bfs(tree),
	};
	debug!("{algorithm}: {} steps for {} nodes", steps.len(), tree.len());
	steps
}

/// Collects traversal steps. Each visit appends its value to the
/// running order.
struct Recorder<'a> {
	tree: &'a BinaryTree,
	steps: Vec<Step>,
}

impl<'a> Recorder<'a> {
	fn new(tree: &'a BinaryTree, start: &str) -> Self {
		Self {
			tree,
			steps: vec![Step::new(Action::Start, start)],
		}
	}

	fn traverse(&mut self, id: NodeId, description: String) {
		self.steps
			.push(Step::new(Action::Traverse, description).focus(id, self.tree.value(id)));
	}

	fn visit(&mut self, id: NodeId) {
		let value = self.tree.value(id);
		self.steps.push(
			Step::new(Action::Visit, format!("Visit node {value}"))
				.focus(id, value)
				.append(i64::from(value)),
		);
	}

	fn finish(self) -> Vec<Step> {
		self.steps
	}
}

/// Explicit-stack left-spine walk: left, root, right.
pub fn inorder(tree: &BinaryTree) -> Vec<Step> {
	let mut rec = Recorder::new(tree, "Start inorder traversal: Left → Root → Right");
	let mut stack = Vec::new();
	let mut current = tree.root();

	while current.is_some() || !stack.is_empty() {
		while let Some(id) = current {
			rec.traverse(id, format!("Go to left child of {}", tree.value(id)));
			stack.push(id);
			current = tree.left(id);
		}
		let Some(id) = stack.pop() else { break };
		rec.visit(id);
		current = tree.right(id);
	}
	rec.finish()
}

/// Root first; right is pushed before left so left pops first.
pub fn preorder(tree: &BinaryTree) -> Vec<Step> {
	let mut rec = Recorder::new(tree, "Start preorder traversal: Root → Left → Right");
	let mut stack: Vec<NodeId> = tree.root().into_iter().collect();

	while let Some(id) = stack.pop() {
		rec.visit(id);
		if let Some(right) = tree.right(id) {
			rec.traverse(id, format!("Add right child {} to stack", tree.value(right)));
			stack.push(right);
		}
		if let Some(left) = tree.left(id) {
			rec.traverse(id, format!("Add left child {} to stack", tree.value(left)));
			stack.push(left);
		}
	}
	rec.finish()
}

/// Two-pass stack walk. The first time a node is on top its children are
/// pushed, the second time it is visited. Expansion is tracked by node id.
pub fn postorder(tree: &BinaryTree) -> Vec<Step> {
	let mut rec = Recorder::new(tree, "Start postorder traversal: Left → Right → Root");
	let mut stack: Vec<NodeId> = tree.root().into_iter().collect();
	let mut expanded = vec![false; tree.len()];

	while let Some(&id) = stack.last() {
		if expanded[id] {
			stack.pop();
			rec.visit(id);
			continue;
		}
		expanded[id] = true;
		if let Some(right) = tree.right(id) {
			rec.traverse(id, format!("Add right child {} to stack", tree.value(right)));
			stack.push(right);
		}
		if let Some(left) = tree.left(id) {
			rec.traverse(id, format!("Add left child {} to stack", tree.value(left)));
			stack.push(left);
		}
	}
	rec.finish()
}

/// Queue-based level order, left child enqueued first.
pub fn bfs(tree: &BinaryTree) -> Vec<Step> {
	let mut rec = Recorder::new(tree, "Start BFS traversal: Level by level");
	let mut queue: VecDeque<NodeId> = tree.root().into_iter().collect();

	while let Some(id) = queue.pop_front() {
		rec.visit(id);
		if let Some(left) = tree.left(id) {
			rec.traverse(id, format!("Add left child {} to queue", tree.value(left)));
			queue.push_back(left);
		}
		if let Some(right) = tree.right(id) {
			rec.traverse(id, format!("Add right child {} to queue", tree.value(right)));
			queue.push_back(right);
		}
	}
	rec.finish()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::trace::{final_result, output_size, result_until, visit_order};

	fn sample() -> BinaryTree {
		// 1 -> (2 -> (4, 5), 3)
		BinaryTree::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)])
	}

	#[test]
	fn inorder_of_right_leaning_tree() {
		let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
		assert_eq!(visit_order(&inorder(&tree)), vec![1, 3, 2]);
	}

	#[test]
	fn traversal_orders() {
		let tree = sample();
		assert_eq!(visit_order(&inorder(&tree)), vec![4, 2, 5, 1, 3]);
		assert_eq!(visit_order(&preorder(&tree)), vec![1, 2, 4, 5, 3]);
		assert_eq!(visit_order(&postorder(&tree)), vec![4, 5, 2, 3, 1]);
		assert_eq!(visit_order(&bfs(&tree)), vec![1, 2, 3, 4, 5]);
	}

	#[test]
	fn postorder_handles_duplicate_values() {
		let tree = BinaryTree::from_level_order(&[Some(1), Some(1), Some(1)]);
		assert_eq!(visit_order(&postorder(&tree)), vec![1, 1, 1]);
		assert_eq!(postorder(&tree).iter().filter(|s| s.is_visit()).count(), 3);
	}

	#[test]
	fn inorder_emits_a_descent_per_node() {
		let steps = inorder(&sample());
		let descents = steps.iter().filter(|s| s.action == Action::Traverse).count();
		assert_eq!(descents, 5);
	}

	#[test]
	fn visit_steps_carry_partial_traversal() {
		let steps = bfs(&sample());
		assert_eq!(final_result(&steps), Some(vec![1, 2, 3, 4, 5]));
		let first_visit = steps.iter().position(Step::is_visit).unwrap();
		assert_eq!(result_until(&steps, first_visit), Some(vec![1]));
		assert_eq!(result_until(&steps, 0), None);
	}

	#[test]
	fn long_chain_stores_one_value_per_visit() {
		let mut tree = BinaryTree::with_root(0);
		let mut tip = tree.root().unwrap();
		for value in 1..10_000 {
			tip = tree.add_right(tip, value);
		}
		for algorithm in TreeAlgorithm::ALL {
			let steps = generate(algorithm, &tree);
			assert_eq!(output_size(&steps), tree.len());
			assert_eq!(final_result(&steps).map(|o| o.len()), Some(tree.len()));
		}
	}

	#[test]
	fn empty_tree_yields_only_start() {
		for algorithm in TreeAlgorithm::ALL {
			let steps = generate(algorithm, &BinaryTree::new());
			assert_eq!(steps.len(), 1);
			assert_eq!(steps[0].action, Action::Start);
		}
	}

	#[test]
	fn single_node() {
		let tree = BinaryTree::with_root(42);
		for algorithm in TreeAlgorithm::ALL {
			assert_eq!(visit_order(&generate(algorithm, &tree)), vec![42]);
		}
	}
}
