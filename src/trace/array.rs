//! Array algorithms: two-sum and Kadane's maximum subarray.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use super::{Action, Algorithm, Step, UnknownAlgorithm, find_by_name};
use crate::structures::Value;

/// Algorithms over an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayAlgorithm {
	/// Hash-map pair search for a target sum.
	TwoSum,
	/// Kadane's maximum subarray sum.
	MaxSubarray,
}

impl ArrayAlgorithm {
	/// Every array algorithm.
	pub const ALL: [ArrayAlgorithm; 2] = [ArrayAlgorithm::TwoSum, ArrayAlgorithm::MaxSubarray];

	/// Whether the algorithm reads a target value.
	pub fn uses_target(self) -> bool {
		matches!(self, ArrayAlgorithm::TwoSum)
	}
}

impl Algorithm for ArrayAlgorithm {
	fn all() -> &'static [Self] {
		&Self::ALL
	}

	fn as_str(self) -> &'static str {
		match self {
			ArrayAlgorithm::TwoSum => "two-sum",
			ArrayAlgorithm::MaxSubarray => "max-subarray",
		}
	}

	fn label(self) -> &'static str {
		match self {
			ArrayAlgorithm::TwoSum => "Two Sum",
			ArrayAlgorithm::MaxSubarray => "Maximum Subarray",
		}
	}
}

impl fmt::Display for ArrayAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ArrayAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		find_by_name(s)
	}
}

/// Trace of `algorithm` over `array`. `target` only matters for two-sum.
pub fn generate(algorithm: ArrayAlgorithm, array: &[Value], target: Value) -> Vec<Step> {
	let steps = match algorithm {
		ArrayAlgorithm::TwoSum => two_sum(array, target),
		ArrayAlgorithm::MaxSubarray => max_subarray(array),
	};
	debug!("{algorithm}: {} steps for {} elements", steps.len(), array.len());
	steps
}

/// Single pass with a value -> index map, stopping at the first pair.
pub fn two_sum(array: &[Value], target: Value) -> Vec<Step> {
	let mut steps = vec![Step::new(
		Action::Start,
		"Initialize hash map to store value-index pairs",
	)];
	let mut seen: HashMap<i64, usize> = HashMap::with_capacity(array.len());

	for (i, &value) in array.iter().enumerate() {
		let complement = i64::from(target) - i64::from(value);
		steps.push(
			Step::new(
				Action::Traverse,
				format!("Check if complement {complement} exists in map"),
			)
			.focus(i, value)
			.highlight([i]),
		);

		if let Some(&j) = seen.get(&complement) {
			steps.push(
				Step::new(Action::Complete, format!("Found pair! Return indices [{j}, {i}]"))
					.focus(i, value)
					.highlight([i, j])
					.result([j as i64, i as i64]),
			);
			return steps;
		}

		steps.push(
			Step::new(
				Action::Visit,
				format!("Add current value {value} at index {i} to map"),
			)
			.focus(i, value)
			.highlight([i]),
		);
		seen.insert(i64::from(value), i);
	}
	steps
}

/// Running-sum scan. The run restarts only when the running sum is negative.
pub fn max_subarray(array: &[Value]) -> Vec<Step> {
	let Some(&first) = array.first() else {
		return vec![Step::new(Action::Start, "Array is empty, nothing to scan")];
	};
	let mut max_sum = i64::from(first);
	let mut current = i64::from(first);
	let mut steps = vec![
		Step::new(
			Action::Start,
			"Initialize maxSum and currentSum with first element",
		)
		.focus(0, first)
		.highlight([0])
		.result([max_sum]),
	];

	for (i, &value) in array.iter().enumerate().skip(1) {
		steps.push(
			Step::new(
				Action::Traverse,
				format!("Compare currentSum + array[{i}] with array[{i}]"),
			)
			.focus(i, value)
			.highlight([i])
			.compare([i - 1]),
		);

		let description = if current < 0 {
			current = i64::from(value);
			format!("Reset currentSum to array[{i}], new start at index {i}")
		} else {
			current += i64::from(value);
			format!("Add array[{i}] to currentSum: {current}")
		};
		steps.push(
			Step::new(Action::Visit, description)
				.focus(i, value)
				.highlight([i]),
		);

		if current > max_sum {
			max_sum = current;
			steps.push(
				Step::new(
					Action::Complete,
					format!("Update maxSum to {max_sum}, end at index {i}"),
				)
				.focus(i, value)
				.highlight([i])
				.result([max_sum]),
			);
		}
	}
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::trace::{Output, final_result};

	#[test]
	fn two_sum_finds_first_pair() {
		let steps = two_sum(&[2, 7, 11, 15], 9);
		let last = steps.last().unwrap();
		assert_eq!(last.action, Action::Complete);
		assert_eq!(last.output, Some(Output::Set(vec![0, 1])));
		assert_eq!(last.description, "Found pair! Return indices [0, 1]");
		// start, check 0, insert 0, check 1, found
		assert_eq!(steps.len(), 5);
	}

	#[test]
	fn two_sum_never_pairs_an_index_with_itself() {
		let steps = two_sum(&[3, 5], 6);
		assert!(steps.iter().all(|s| s.action != Action::Complete));
		assert_eq!(steps.iter().filter(|s| s.is_visit()).count(), 2);
	}

	#[test]
	fn two_sum_pairs_duplicates() {
		let steps = two_sum(&[3, 3], 6);
		assert_eq!(final_result(&steps), Some(vec![0, 1]));
	}

	#[test]
	fn max_subarray_classic() {
		let steps = max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
		assert_eq!(final_result(&steps), Some(vec![6]));
	}

	#[test]
	fn max_subarray_resets_only_on_negative_run() {
		// running sum 0 is not negative, so index 1 extends rather than resets
		let steps = max_subarray(&[0, 5]);
		assert!(steps[2].description.starts_with("Add array[1]"));
		let steps = max_subarray(&[-1, 5]);
		assert!(steps[2].description.starts_with("Reset currentSum"));
	}

	#[test]
	fn max_subarray_single_and_empty() {
		let steps = max_subarray(&[-4]);
		assert_eq!(steps.len(), 1);
		assert_eq!(steps[0].output, Some(Output::Set(vec![-4])));
		assert_eq!(max_subarray(&[]).len(), 1);
	}

	#[test]
	fn algorithm_names_round_trip() {
		for algorithm in ArrayAlgorithm::ALL {
			assert_eq!(algorithm.as_str().parse::<ArrayAlgorithm>(), Ok(algorithm));
		}
		assert!("binary-search".parse::<ArrayAlgorithm>().is_err());
	}
}
