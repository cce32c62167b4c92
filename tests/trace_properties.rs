use algorithm_visualizer::input::parse_tree;
use algorithm_visualizer::structures::{BinaryTree, LinkedList, NodeId, Value};
use algorithm_visualizer::trace::tree::TreeAlgorithm;
use algorithm_visualizer::trace::{Action, Output, array, final_result, list, tree, visit_order};
use proptest::prelude::*;

fn small_ints() -> impl Strategy<Value = Vec<Value>> {
	prop::collection::vec(-50i32..50, 0..12)
}

fn slots() -> impl Strategy<Value = Vec<Option<Value>>> {
	(
		-100i32..100,
		prop::collection::vec(prop::option::weighted(0.7, -100i32..100), 0..20),
	)
		.prop_map(|(root, rest)| {
			let mut slots = vec![Some(root)];
			slots.extend(rest);
			slots
		})
}

fn kadane(values: &[Value]) -> i64 {
	let mut best = i64::from(values[0]);
	let mut run = i64::from(values[0]);
	for &v in &values[1..] {
		run = (run + i64::from(v)).max(i64::from(v));
		best = best.max(run);
	}
	best
}

fn recursive(tree: &BinaryTree, algorithm: TreeAlgorithm) -> Vec<Value> {
	fn walk(tree: &BinaryTree, id: Option<NodeId>, algorithm: TreeAlgorithm, out: &mut Vec<Value>) {
		let Some(id) = id else { return };
		if algorithm == TreeAlgorithm::Preorder {
			out.push(tree.value(id));
		}
		walk(tree, tree.left(id), algorithm, out);
		if algorithm == TreeAlgorithm::Inorder {
			out.push(tree.value(id));
		}
		walk(tree, tree.right(id), algorithm, out);
		if algorithm == TreeAlgorithm::Postorder {
			out.push(tree.value(id));
		}
	}

	let mut out = Vec::new();
	if algorithm == TreeAlgorithm::Bfs {
		let mut queue: std::collections::VecDeque<NodeId> = tree.root().into_iter().collect();
		while let Some(id) = queue.pop_front() {
			out.push(tree.value(id));
			queue.extend(tree.left(id));
			queue.extend(tree.right(id));
		}
	} else {
		walk(tree, tree.root(), algorithm, &mut out);
	}
	out
}

fn has_pair(values: &[Value], target: Value) -> bool {
	(0..values.len()).any(|i| (i + 1..values.len()).any(|j| values[i] + values[j] == target))
}

proptest! {
	#[test]
	fn two_sum_found_step_names_a_valid_pair(values in small_ints(), target in -100i32..100) {
		let steps = array::two_sum(&values, target);
		let found = steps.iter().find(|s| s.action == Action::Complete);
		if has_pair(&values, target) {
			let found = found.expect("a pair exists");
			let Some(Output::Set(result)) = &found.output else {
				panic!("found step carries indices");
			};
			let (j, i) = (result[0] as usize, result[1] as usize);
			prop_assert!(j < i);
			prop_assert_eq!(values[i] + values[j], target);
			prop_assert!(std::ptr::eq(found, steps.last().unwrap()));
		} else {
			prop_assert!(found.is_none());
			let inserts = steps.iter().filter(|s| s.action == Action::Visit).count();
			prop_assert_eq!(inserts, values.len());
		}
	}

	#[test]
	fn max_subarray_last_maximum_is_kadane(values in prop::collection::vec(-50i32..50, 1..16)) {
		let steps = array::max_subarray(&values);
		let last = final_result(&steps).expect("start step has a result");
		prop_assert_eq!(last, vec![kadane(&values)]);
	}

	#[test]
	fn traversals_match_recursive_reference(slots in slots()) {
		let shape = BinaryTree::from_level_order(&slots);
		for &algorithm in TreeAlgorithm::ALL.iter() {
			let steps = tree::generate(algorithm, &shape);
			prop_assert_eq!(visit_order(&steps), recursive(&shape, algorithm));
			prop_assert_eq!(steps[0].action, Action::Start);
		}
	}

	#[test]
	fn reverse_ends_on_the_original_tail(values in prop::collection::vec(-9i32..10, 1..12)) {
		let chain = LinkedList::from_values(&values);
		let steps = list::reverse(&chain);
		let last = steps.last().unwrap();
		prop_assert_eq!(last.action, Action::Complete);
		prop_assert_eq!(last.focus.map(|f| f.value), values.last().copied());
		let visits = steps.iter().filter(|s| s.action == Action::Visit).count();
		prop_assert_eq!(visits, values.len());
	}

	#[test]
	fn detect_cycle_agrees_with_construction(values in prop::collection::vec(0i32..10, 1..10), pos in prop::option::of(0usize..10)) {
		let mut chain = LinkedList::from_values(&values);
		let cyclic = pos.is_some_and(|p| p < values.len());
		if let Some(p) = pos {
			chain = chain.with_cycle_to(p);
		}
		let steps = list::detect_cycle(&chain);
		let detected = steps.iter().any(|s| s.description.starts_with("Cycle detected"));
		prop_assert_eq!(detected, cyclic);
	}

	#[test]
	fn level_order_round_trips(slots in slots()) {
		let shape = BinaryTree::from_level_order(&slots);
		prop_assert_eq!(BinaryTree::from_level_order(&shape.to_level_order()), shape.clone());
		prop_assert_eq!(parse_tree(&shape.to_level_order_string()), Ok(shape));
	}
}
