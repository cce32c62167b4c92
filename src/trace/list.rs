//! Linked list algorithms.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::{Action, Algorithm, Step, UnknownAlgorithm, find_by_name};
use crate::structures::{LinkedList, NodeId};

/// Algorithms over a linked list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListAlgorithm {
	/// In-place pointer reversal.
	Reverse,
	/// Digit sum with carry.
	AddTwoNumbers,
	/// Floyd's cycle detection.
	DetectCycle,
}

impl ListAlgorithm {
	/// Every list algorithm.
	pub const ALL: [ListAlgorithm; 3] = [
		ListAlgorithm::Reverse,
		ListAlgorithm::AddTwoNumbers,
		ListAlgorithm::DetectCycle,
	];
}

impl Algorithm for ListAlgorithm {
	fn all() -> &'static [Self] {
		&Self::ALL
	}

	fn as_str(self) -> &'static str {
		match self {
			ListAlgorithm::Reverse => "reverse",
			ListAlgorithm::AddTwoNumbers => "add-two-numbers",
			ListAlgorithm::DetectCycle => "detect-cycle",
		}
	}

	fn label(self) -> &'static str {
		match self {
			ListAlgorithm::Reverse => "Reverse",
			ListAlgorithm::AddTwoNumbers => "Add Two Numbers",
			ListAlgorithm::DetectCycle => "Detect Cycle",
		}
	}
}

impl fmt::Display for ListAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ListAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		find_by_name(s)
	}
}

/// Trace of `algorithm` over `list`.
pub fn generate(algorithm: ListAlgorithm, list: &LinkedList) -> Vec<Step> {
	let steps = match algorithm {
		ListAlgorithm::Reverse => reverse(list),
		ListAlgorithm::AddTwoNumbers => add_two_numbers(list),
		ListAlgorithm::DetectCycle => detect_cycle(list),
	};
	debug!("{algorithm}: {} steps for {} nodes", steps.len(), list.len());
	steps
}

fn describe(list: &LinkedList, id: Option<NodeId>) -> String {
	id.map_or_else(|| "null".to_string(), |id| list.value(id).to_string())
}

fn at(step: Step, list: &LinkedList, id: Option<NodeId>) -> Step {
	match id {
		Some(id) => step.focus(id, list.value(id)),
		None => step,
	}
}

/// Iterative pointer reversal. Links are only simulated, the list is not
/// modified.
pub fn reverse(list: &LinkedList) -> Vec<Step> {
	let mut steps = vec![at(
		Step::new(Action::Start, "Initialize prev = null, current = head"),
		list,
		list.head(),
	)];
	let mut prev: Option<NodeId> = None;
	let mut current = list.head();

	for _ in 0..list.len() {
		let Some(id) = current else { break };
		let next = list.next(id);
		steps.push(
			Step::new(
				Action::Traverse,
				format!("Store next node: {}", describe(list, next)),
			)
			.focus(id, list.value(id)),
		);
		steps.push(
			Step::new(
				Action::Visit,
				format!("Reverse link: current.next = prev ({})", describe(list, prev)),
			)
			.focus(id, list.value(id)),
		);
		prev = Some(id);
		current = next;
		if let Some(next) = current {
			steps.push(
				Step::new(
					Action::Traverse,
					format!("Move to next node: {}", list.value(next)),
				)
				.focus(next, list.value(next)),
			);
		}
	}

	steps.push(at(
		Step::new(Action::Complete, "Return prev as new head"),
		list,
		prev,
	));
	steps
}

/// Digit-by-digit carry propagation over a single list.
pub fn add_two_numbers(list: &LinkedList) -> Vec<Step> {
	let mut steps = vec![at(
		Step::new(Action::Start, "Initialize carry = 0"),
		list,
		list.head(),
	)];
	let mut carry: i64 = 0;
	let ids: Vec<NodeId> = list.ids().collect();

	for (n, &id) in ids.iter().enumerate() {
		let value = list.value(id);
		let sum = i64::from(value) + carry;
		steps.push(
			Step::new(
				Action::Visit,
				format!("Calculate sum: {value} + {carry} = {sum}"),
			)
			.focus(id, value),
		);

		let digit = sum % 10;
		carry = sum.div_euclid(10);
		steps.push(
			Step::new(Action::Visit, format!("Update digit: {digit}, carry: {carry}"))
				.focus(id, value)
				.append(digit),
		);

		if let Some(&next) = ids.get(n + 1) {
			steps.push(
				Step::new(
					Action::Traverse,
					format!("Move to next node: {}", list.value(next)),
				)
				.focus(next, list.value(next)),
			);
		}
	}

	if carry > 0 {
		steps.push(Step::new(Action::Complete, format!("Add final carry: {carry}")).append(carry));
	}
	steps
}

/// Floyd's slow/fast pointers, compared by node identity.
pub fn detect_cycle(list: &LinkedList) -> Vec<Step> {
	let mut steps = vec![at(
		Step::new(Action::Start, "Initialize slow and fast pointers at head"),
		list,
		list.head(),
	)];
	let mut slow = list.head();
	let mut fast = list.head();

	while let Some(after_fast) = fast.and_then(|f| list.next(f)) {
		slow = slow.and_then(|s| list.next(s));
		fast = list.next(after_fast);
		steps.push(at(
			Step::new(
				Action::Traverse,
				format!(
					"Move slow pointer to {}, fast to {}",
					describe(list, slow),
					describe(list, fast)
				),
			),
			list,
			slow,
		));

		if slow.is_some() && slow == fast {
			steps.push(at(
				Step::new(Action::Visit, "Cycle detected! Slow and fast pointers met"),
				list,
				slow,
			));
			return steps;
		}
	}

	steps.push(Step::new(
		Action::Complete,
		"No cycle detected - reached end of list",
	));
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::trace::{final_result, output_size, result_until, visit_order};

	#[test]
	fn reverse_ends_on_original_tail() {
		let list = LinkedList::from_values(&[2, 4, 3]);
		let steps = reverse(&list);
		let last = steps.last().unwrap();
		assert_eq!(last.action, Action::Complete);
		assert_eq!(last.focus.map(|f| f.value), Some(3));
		assert_eq!(visit_order(&steps), vec![2, 4, 3]);
		// start + 3 * (store, relink) + 2 advances + return
		assert_eq!(steps.len(), 1 + 6 + 2 + 1);
	}

	#[test]
	fn reverse_of_empty_list_is_start_then_return() {
		let steps = reverse(&LinkedList::default());
		assert_eq!(steps.len(), 2);
		assert_eq!(steps[1].focus, None);
	}

	#[test]
	fn add_two_numbers_propagates_carry() {
		let list = LinkedList::from_values(&[15, 9]);
		let steps = add_two_numbers(&list);
		assert_eq!(steps[4].description, "Calculate sum: 9 + 1 = 10");
		let last = steps.last().unwrap();
		assert_eq!(last.action, Action::Complete);
		assert_eq!(last.description, "Add final carry: 1");
		assert_eq!(final_result(&steps), Some(vec![5, 0, 1]));
		assert_eq!(result_until(&steps, 2), Some(vec![5]));
	}

	#[test]
	fn add_two_numbers_stores_one_value_per_digit() {
		let values: Vec<_> = (0..20_000).map(|i| i % 10).collect();
		let list = LinkedList::from_values(&values);
		let steps = add_two_numbers(&list);
		assert!(output_size(&steps) <= list.len() + 1);
		assert_eq!(final_result(&steps).map(|d| d.len()), Some(list.len()));
	}

	#[test]
	fn add_two_numbers_without_final_carry() {
		let steps = add_two_numbers(&LinkedList::from_values(&[2, 4, 3]));
		assert!(steps.iter().all(|s| s.action != Action::Complete));
		assert_eq!(steps[1].description, "Calculate sum: 2 + 0 = 2");
		assert_eq!(final_result(&steps), Some(vec![2, 4, 3]));
	}

	#[test]
	fn detect_cycle_reports_no_cycle_on_acyclic_list() {
		let steps = detect_cycle(&LinkedList::from_values(&[1, 2, 3, 4, 5]));
		assert_eq!(steps.last().unwrap().action, Action::Complete);
		assert!(steps.iter().all(|s| !s.is_visit()));
	}

	#[test]
	fn detect_cycle_finds_synthetic_cycle() {
		let list = LinkedList::from_values(&[3, 2, 0, -4]).with_cycle_to(1);
		let steps = detect_cycle(&list);
		let last = steps.last().unwrap();
		assert_eq!(last.action, Action::Visit);
		assert!(last.description.starts_with("Cycle detected"));
	}

	#[test]
	fn detect_cycle_finds_self_loop() {
		let list = LinkedList::from_values(&[1]).with_cycle_to(0);
		assert!(detect_cycle(&list).last().unwrap().is_visit());
	}

	#[test]
	fn zero_values_are_printed() {
		let steps = reverse(&LinkedList::from_values(&[1, 0]));
		assert_eq!(steps[1].description, "Store next node: 0");
	}
}
