//! Step-trace generators.
//!
//! Each generator runs a textbook algorithm over a snapshot and records what
//! it does as an ordered list of [`Step`]s. Generators are pure and total:
//! they never panic on empty input and always return at least one step.

pub mod array;
pub mod list;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use crate::structures::Value;

/// An algorithm name that no generator answers to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);

/// A named generator family member, selectable from the UI by its
/// kebab-case name.
pub trait Algorithm:
	Copy + PartialEq + Send + Sync + fmt::Display + FromStr<Err = UnknownAlgorithm> + 'static
{
	/// Every member, in selector order.
	fn all() -> &'static [Self];
	/// Stable kebab-case name, the inverse of `FromStr`.
	fn as_str(self) -> &'static str;
	/// Human-readable name for the selector.
	fn label(self) -> &'static str;
}

fn find_by_name<A: Algorithm>(name: &str) -> Result<A, UnknownAlgorithm> {
	A::all()
		.iter()
		.copied()
		.find(|a| a.as_str() == name)
		.ok_or_else(|| UnknownAlgorithm(name.to_string()))
}

/// What a step does to the element it focuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
	/// Set-up before the first element is touched.
	Start,
	/// Moving to or inspecting an element without consuming it.
	Traverse,
	/// Consuming an element: it joins the visited set.
	Visit,
	/// A result has been reached.
	Complete,
}

impl Action {
	/// Lowercase name, used as a `data-action` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Action::Start => "start",
			Action::Traverse => "traverse",
			Action::Visit => "visit",
			Action::Complete => "complete",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The element a step is about: an array index or an arena node id, plus the
/// value stored there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Focus {
	/// Array index or node id.
	pub index: usize,
	/// Value held at `index`.
	pub value: Value,
}

/// How a step changes the running result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
	/// Replace the result wholesale (pair indices, running maximum).
	Set(Vec<i64>),
	/// Append one value (next traversal value, next digit).
	Push(i64),
}

impl Output {
	/// Number of values this step stores.
	pub fn len(&self) -> usize {
		match self {
			Output::Set(values) => values.len(),
			Output::Push(_) => 1,
		}
	}

	/// Whether the step stores no values.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// One frame of an animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
	/// Sentence shown under the progress bar and in the step log.
	pub description: String,
	/// Kind of step.
	pub action: Action,
	/// Element the step is about, if any.
	pub focus: Option<Focus>,
	/// Array indices drawn as active.
	pub highlighted: Vec<usize>,
	/// Array indices drawn as being compared against.
	pub comparing: Vec<usize>,
	/// Change to the running result, see [`result_until`].
	pub output: Option<Output>,
}

impl Step {
	/// A step with nothing focused or highlighted.
	pub fn new(action: Action, description: impl Into<String>) -> Self {
		Self {
			description: description.into(),
			action,
			focus: None,
			highlighted: Vec::new(),
			comparing: Vec::new(),
			output: None,
		}
	}

	/// Focus the element at `index` holding `value`.
	pub fn focus(mut self, index: usize, value: Value) -> Self {
		self.focus = Some(Focus { index, value });
		self
	}

	/// Set or clear the focus.
	pub fn focus_opt(mut self, focus: Option<Focus>) -> Self {
		self.focus = focus;
		self
	}

	/// Array indices drawn as active.
	pub fn highlight(mut self, indices: impl Into<Vec<usize>>) -> Self {
		self.highlighted = indices.into();
		self
	}

	/// Array indices drawn as compared against.
	pub fn compare(mut self, indices: impl Into<Vec<usize>>) -> Self {
		self.comparing = indices.into();
		self
	}

	/// Replace the running result with `result`.
	pub fn result(mut self, result: impl Into<Vec<i64>>) -> Self {
		self.output = Some(Output::Set(result.into()));
		self
	}

	/// Append `value` to the running result.
	pub fn append(mut self, value: i64) -> Self {
		self.output = Some(Output::Push(value));
		self
	}

	/// Whether this is a [`Action::Visit`] step.
	pub fn is_visit(&self) -> bool {
		self.action == Action::Visit
	}
}

/// Values of the focused elements of every visit step, in order.
pub fn visit_order(steps: &[Step]) -> Vec<Value> {
	steps
		.iter()
		.filter(|s| s.is_visit())
		.filter_map(|s| s.focus.map(|f| f.value))
		.collect()
}

/// Focus indices visited up to and including `cursor`.
pub fn visited_until(steps: &[Step], cursor: usize) -> Vec<usize> {
	steps
		.iter()
		.take(cursor + 1)
		.filter(|s| s.is_visit())
		.filter_map(|s| s.focus.map(|f| f.index))
		.collect()
}

/// The running result after the steps up to and including `cursor`, or
/// `None` if none of them produced output yet.
pub fn result_until(steps: &[Step], cursor: usize) -> Option<Vec<i64>> {
	let mut result: Option<Vec<i64>> = None;
	for output in steps.iter().take(cursor + 1).filter_map(|s| s.output.as_ref()) {
		match output {
			Output::Set(values) => result = Some(values.clone()),
			Output::Push(value) => result.get_or_insert_with(Vec::new).push(*value),
		}
	}
	result
}

/// The result once every step has run.
pub fn final_result(steps: &[Step]) -> Option<Vec<i64>> {
	result_until(steps, steps.len().saturating_sub(1))
}

/// Values stored across all step outputs.
pub fn output_size(steps: &[Step]) -> usize {
	steps.iter().filter_map(|s| s.output.as_ref()).map(Output::len).sum()
}
