use crate::trace::{Step, visited_until};

/// How a node is drawn in the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
	#[default]
	Pending,
	Visited,
	Current,
}

impl NodeState {
	pub fn css_class(self) -> &'static str {
		match self {
			NodeState::Pending => "node pending",
			NodeState::Visited => "node visited",
			NodeState::Current => "node current",
		}
	}
}

/// State of each of `len` nodes at `cursor`: the focus of the current step
/// is current, anything an earlier visit step focused is visited.
pub fn node_states(len: usize, steps: &[Step], cursor: usize) -> Vec<NodeState> {
	let mut states = vec![NodeState::Pending; len];
	for id in visited_until(steps, cursor) {
		if let Some(state) = states.get_mut(id) {
			*state = NodeState::Visited;
		}
	}
	if let Some(focus) = steps.get(cursor).and_then(|s| s.focus) {
		if let Some(state) = states.get_mut(focus.index) {
			*state = NodeState::Current;
		}
	}
	states
}

/// Where a step log row sits relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowState {
	Past,
	Current,
	Upcoming,
}

pub fn row_state(index: usize, cursor: usize) -> RowState {
	match index.cmp(&cursor) {
		std::cmp::Ordering::Less => RowState::Past,
		std::cmp::Ordering::Equal => RowState::Current,
		std::cmp::Ordering::Greater => RowState::Upcoming,
	}
}

/// `[1, 3, 2]` style rendering of a partial result.
pub fn format_result(values: &[i64]) -> String {
	let items: Vec<String> = values.iter().map(i64::to_string).collect();
	format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::structures::BinaryTree;
	use crate::trace::tree::inorder;

	#[test]
	fn states_follow_the_cursor() {
		let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
		let steps = inorder(&tree);
		// start, go-left 1, visit 1, go-left 2, go-left 3, visit 3, visit 2
		assert_eq!(node_states(3, &steps, 0), vec![NodeState::Pending; 3]);
		assert_eq!(
			node_states(3, &steps, 2),
			vec![NodeState::Current, NodeState::Pending, NodeState::Pending]
		);
		assert_eq!(
			node_states(3, &steps, 4),
			vec![NodeState::Visited, NodeState::Pending, NodeState::Current]
		);
		let end = steps.len() - 1;
		assert_eq!(
			node_states(3, &steps, end),
			vec![NodeState::Visited, NodeState::Current, NodeState::Visited]
		);
	}

	#[test]
	fn rows_split_around_the_cursor() {
		let states: Vec<_> = (0..4).map(|i| row_state(i, 2)).collect();
		assert_eq!(
			states,
			vec![RowState::Past, RowState::Past, RowState::Current, RowState::Upcoming]
		);
		assert_eq!(row_state(0, 0), RowState::Current);
	}

	#[test]
	fn results_are_bracketed() {
		assert_eq!(format_result(&[]), "[]");
		assert_eq!(format_result(&[0, 1]), "[0, 1]");
		assert_eq!(format_result(&[-3]), "[-3]");
	}

	#[test]
	fn out_of_range_focus_is_ignored() {
		let steps = vec![Step::new(crate::trace::Action::Visit, "x").focus(9, 0)];
		assert_eq!(node_states(2, &steps, 0), vec![NodeState::Pending; 2]);
	}
}
