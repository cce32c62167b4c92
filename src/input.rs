//! Parsers for the "customize input" panels.
//!
//! Array and list input is forgiving: tokens that are not integers are
//! dropped. Tree input is strict because a dropped token would shift every
//! later slot to a different parent.

use thiserror::Error;

use crate::structures::{BinaryTree, LinkedList, Value};

/// Placeholder for an absent child in level-order input.
pub const NULL_TOKEN: &str = "null";

/// Why a panel refused its input. The message is shown under the fields.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
	/// No number could be read from array or list input.
	#[error("enter at least one number, separated by commas")]
	Empty,
	/// Tree input is blank or starts with `null`.
	#[error("the first value must be a number, it becomes the root")]
	MissingRoot,
	/// A level-order slot that is neither an integer nor `null`.
	#[error("`{0}` is neither a number nor `null`")]
	InvalidToken(String),
	/// Two-sum target that is not an integer.
	#[error("target `{0}` is not a number")]
	InvalidTarget(String),
}

fn numbers(input: &str) -> Vec<Value> {
	input
		.split(',')
		.filter_map(|token| token.trim().parse::<Value>().ok())
		.collect()
}

/// Comma-separated integers for the array panel.
pub fn parse_array(input: &str) -> Result<Vec<Value>, InputError> {
	let values = numbers(input);
	if values.is_empty() {
		return Err(InputError::Empty);
	}
	Ok(values)
}

/// Comma-separated integers, linked head to tail.
pub fn parse_list(input: &str) -> Result<LinkedList, InputError> {
	let values = numbers(input);
	if values.is_empty() {
		return Err(InputError::Empty);
	}
	Ok(LinkedList::from_values(&values))
}

/// Two-sum target, surrounding whitespace ignored.
pub fn parse_target(input: &str) -> Result<Value, InputError> {
	let trimmed = input.trim();
	trimmed
		.parse()
		.map_err(|_| InputError::InvalidTarget(trimmed.to_string()))
}

/// Level-order slots, `null` marking absent children. A single trailing
/// comma is ignored.
pub fn parse_level_order(input: &str) -> Result<Vec<Option<Value>>, InputError> {
	let input = input.trim();
	let input = input.strip_suffix(',').unwrap_or(input);
	if input.trim().is_empty() {
		return Err(InputError::MissingRoot);
	}
	let slots = input
		.split(',')
		.map(str::trim)
		.map(|token| match token {
			NULL_TOKEN => Ok(None),
			_ => token
				.parse()
				.map(Some)
				.map_err(|_| InputError::InvalidToken(token.to_string())),
		})
		.collect::<Result<Vec<_>, _>>()?;
	match slots.first() {
		Some(Some(_)) => Ok(slots),
		_ => Err(InputError::MissingRoot),
	}
}

/// Level-order input built into a tree.
pub fn parse_tree(input: &str) -> Result<BinaryTree, InputError> {
	parse_level_order(input).map(|slots| BinaryTree::from_level_order(&slots))
}

/// Render values the way the input panels expect them back.
pub fn join_values(values: &[Value]) -> String {
	values
		.iter()
		.map(Value::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn array_drops_non_numeric_tokens() {
		assert_eq!(parse_array(" 2, 7 ,x, 11,,15 "), Ok(vec![2, 7, 11, 15]));
		assert_eq!(parse_array("-3,4"), Ok(vec![-3, 4]));
	}

	#[test]
	fn array_rejects_when_nothing_parses() {
		assert_eq!(parse_array(""), Err(InputError::Empty));
		assert_eq!(parse_array("a, b"), Err(InputError::Empty));
	}

	#[test]
	fn list_preserves_order() {
		let list = parse_list("2,4,3").unwrap();
		assert_eq!(list.values(), vec![2, 4, 3]);
		assert_eq!(parse_list(" , "), Err(InputError::Empty));
	}

	#[test]
	fn target_must_be_a_number() {
		assert_eq!(parse_target(" 9 "), Ok(9));
		assert_eq!(parse_target("nine"), Err(InputError::InvalidTarget("nine".into())));
	}

	#[test]
	fn tree_from_level_order() {
		let tree = parse_tree("1, null, 2, 3").unwrap();
		assert_eq!(tree.len(), 3);
		assert_eq!(tree.to_level_order_string(), "1,null,2,3");
	}

	#[test]
	fn level_order_ignores_trailing_comma() {
		assert_eq!(parse_level_order("1,2,3,"), parse_level_order("1,2,3"));
		assert_eq!(parse_level_order(" 1, null, 2 , "), Ok(vec![Some(1), None, Some(2)]));
		assert_eq!(parse_level_order(","), Err(InputError::MissingRoot));
		assert_eq!(parse_level_order("1,,2"), Err(InputError::InvalidToken(String::new())));
	}

	#[test]
	fn tree_rejections() {
		assert_eq!(parse_tree(""), Err(InputError::MissingRoot));
		assert_eq!(parse_tree("   "), Err(InputError::MissingRoot));
		assert_eq!(parse_tree("null,1"), Err(InputError::MissingRoot));
		assert_eq!(parse_tree("1,two,3"), Err(InputError::InvalidToken("two".into())));
	}

	#[test]
	fn join_matches_array_panel_format() {
		assert_eq!(join_values(&[2, 7, 11]), "2, 7, 11");
	}
}
