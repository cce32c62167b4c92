use std::fmt;

use crate::structures::{BinaryTree, LinkedList, Value};
use crate::trace::Algorithm;
use crate::trace::array::ArrayAlgorithm;
use crate::trace::list::ListAlgorithm;
use crate::trace::tree::TreeAlgorithm;

/// Problem difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
	/// Easy.
	Easy,
	/// Medium.
	Medium,
	/// Hard.
	Hard,
}

impl Difficulty {
	/// Display name.
	pub fn as_str(self) -> &'static str {
		match self {
			Difficulty::Easy => "Easy",
			Difficulty::Medium => "Medium",
			Difficulty::Hard => "Hard",
		}
	}

	/// CSS class carrying the difficulty color.
	pub fn css_class(self) -> &'static str {
		match self {
			Difficulty::Easy => "difficulty easy",
			Difficulty::Medium => "difficulty medium",
			Difficulty::Hard => "difficulty hard",
		}
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Structure a problem is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Array problems.
	Arrays,
	/// Linked list problems.
	LinkedLists,
	/// Binary tree problems.
	Trees,
}

impl Category {
	/// Every category, in browse order.
	pub const ALL: [Category; 3] = [Category::Arrays, Category::LinkedLists, Category::Trees];

	/// Path segment under `/categories`.
	pub fn slug(self) -> &'static str {
		match self {
			Category::Arrays => "arrays",
			Category::LinkedLists => "linked-lists",
			Category::Trees => "trees",
		}
	}

	/// Inverse of [`Category::slug`].
	pub fn from_slug(slug: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.slug() == slug)
	}
}

/// Display metadata for a [`Category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMeta {
	/// Category described.
	pub category: Category,
	/// Heading shown on cards.
	pub name: &'static str,
	/// Emoji shown on cards.
	pub icon: &'static str,
	/// Color token used by the stylesheet (`accent-<color>`).
	pub color: &'static str,
}

impl CategoryMeta {
	/// Same as the category slug.
	pub fn slug(&self) -> &'static str {
		self.category.slug()
	}

	/// `accent-<color>` class.
	pub fn accent_class(&self) -> String {
		format!("accent-{}", self.color)
	}
}

/// Worked example shown on the description tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Example {
	/// Input as written in the problem statement.
	pub input: &'static str,
	/// Expected answer.
	pub output: &'static str,
	/// Why the answer holds.
	pub explanation: &'static str,
}

/// Payload shape of a [`Visualization`] without the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualizationKind {
	/// Array cells.
	Array,
	/// Canvas tree.
	Tree,
	/// Node chain.
	LinkedList,
}

impl VisualizationKind {
	/// Lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			VisualizationKind::Array => "array",
			VisualizationKind::Tree => "tree",
			VisualizationKind::LinkedList => "linked-list",
		}
	}
}

/// What a problem animates. The variant fixes both the payload shape and
/// the set of algorithms that can run over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visualization {
	/// Array with a two-sum target.
	Array {
		/// Cell values.
		array: Vec<Value>,
		/// Target sum, ignored by algorithms that do not use one.
		target: Value,
		/// Algorithm selected first.
		algorithm: ArrayAlgorithm,
	},
	/// Binary tree.
	Tree {
		/// Initial shape.
		tree: BinaryTree,
		/// Algorithm selected first.
		algorithm: TreeAlgorithm,
	},
	/// Singly-linked list.
	LinkedList {
		/// Initial list, possibly cyclic.
		list: LinkedList,
		/// Algorithm selected first.
		algorithm: ListAlgorithm,
	},
}

impl Visualization {
	/// Payload shape.
	pub fn kind(&self) -> VisualizationKind {
		match self {
			Visualization::Array { .. } => VisualizationKind::Array,
			Visualization::Tree { .. } => VisualizationKind::Tree,
			Visualization::LinkedList { .. } => VisualizationKind::LinkedList,
		}
	}

	/// Name of the initial algorithm.
	pub fn algorithm_name(&self) -> &'static str {
		match self {
			Visualization::Array { algorithm, .. } => algorithm.as_str(),
			Visualization::Tree { algorithm, .. } => algorithm.as_str(),
			Visualization::LinkedList { algorithm, .. } => algorithm.as_str(),
		}
	}
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
	/// Path segment under `/problems`.
	pub id: &'static str,
	/// Title.
	pub title: &'static str,
	/// Difficulty.
	pub difficulty: Difficulty,
	/// Display names of topic tags.
	pub tags: &'static [&'static str],
	/// Category it is listed under.
	pub category: Category,
	/// Problem statement.
	pub description: &'static str,
	/// Worked examples.
	pub examples: &'static [Example],
	/// Input constraints, one per bullet.
	pub constraints: &'static [&'static str],
	/// Time bound of the animated solution.
	pub time_complexity: &'static str,
	/// Space bound of the animated solution.
	pub space_complexity: &'static str,
	/// Like count, if known.
	pub likes: Option<u32>,
	/// Solve count, if known.
	pub solved: Option<u32>,
	/// Data and algorithm for the visualize tab.
	pub visualization: Visualization,
}

impl Problem {
	/// Shape of the visualization payload.
	pub fn kind(&self) -> VisualizationKind {
		self.visualization.kind()
	}

	/// Whether any tag maps to `slug`.
	pub fn has_tag(&self, slug: &str) -> bool {
		self.tags.iter().any(|t| tag_slug(t) == slug)
	}
}

/// URL form of a tag: lowercase, words joined by `-`.
pub fn tag_slug(tag: &str) -> String {
	tag.split_whitespace()
		.map(str::to_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}

/// Thousands-separated counter, `850000` -> `850,000`.
pub fn format_count(n: u32) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}
