use super::{NodeId, Value};

/// One list cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListNode {
	/// Payload.
	pub value: Value,
	/// Successor, `None` at the tail.
	pub next: Option<NodeId>,
}

/// Singly-linked list stored as an arena of nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedList {
	nodes: Vec<ListNode>,
	head: Option<NodeId>,
}

impl LinkedList {
	/// Build a chain holding `values` in order.
	pub fn from_values(values: &[Value]) -> Self {
		let len = values.len();
		let nodes = values
			.iter()
			.enumerate()
			.map(|(i, &value)| ListNode {
				value,
				next: (i + 1 < len).then_some(i + 1),
			})
			.collect();
		Self {
			nodes,
			head: (len > 0).then_some(0),
		}
	}

	/// Link the tail back to the node at `pos`, producing a cyclic list.
	///
	/// Only intended for exercising cycle detection; positions past the end
	/// leave the list untouched.
	pub fn with_cycle_to(mut self, pos: usize) -> Self {
		if pos < self.nodes.len() {
			if let Some(tail) = self.nodes.last_mut() {
				tail.next = Some(pos);
			}
		}
		self
	}

	/// First node, `None` when empty.
	pub fn head(&self) -> Option<NodeId> {
		self.head
	}

	/// Node `id`. Panics if `id` is not in this list.
	pub fn node(&self, id: NodeId) -> &ListNode {
		&self.nodes[id]
	}

	/// Payload of node `id`.
	pub fn value(&self, id: NodeId) -> Value {
		self.nodes[id].value
	}

	/// Successor of node `id`.
	pub fn next(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id].next
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the list has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node ids from the head onwards. Stops after `len()` nodes so a cyclic
	/// fixture still terminates.
	pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		std::iter::successors(self.head, |&id| self.next(id)).take(self.nodes.len())
	}

	/// Payloads from the head onwards.
	pub fn values(&self) -> Vec<Value> {
		self.ids().map(|id| self.value(id)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_chain_in_order() {
		let list = LinkedList::from_values(&[2, 4, 3]);
		assert_eq!(list.len(), 3);
		assert_eq!(list.head(), Some(0));
		assert_eq!(list.next(0), Some(1));
		assert_eq!(list.next(2), None);
		assert_eq!(list.values(), vec![2, 4, 3]);
	}

	#[test]
	fn empty_list_has_no_head() {
		let list = LinkedList::from_values(&[]);
		assert!(list.is_empty());
		assert_eq!(list.head(), None);
		assert!(list.values().is_empty());
	}

	#[test]
	fn cyclic_iteration_is_bounded() {
		let list = LinkedList::from_values(&[3, 2, 0, -4]).with_cycle_to(1);
		assert_eq!(list.next(3), Some(1));
		assert_eq!(list.values(), vec![3, 2, 0, -4]);
	}

	#[test]
	fn cycle_position_out_of_range_is_ignored() {
		let list = LinkedList::from_values(&[1, 2]).with_cycle_to(5);
		assert_eq!(list.next(1), None);
	}
}
