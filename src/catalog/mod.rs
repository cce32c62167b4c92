//! Static problem catalog and its lookups.

mod data;
mod types;

use std::sync::OnceLock;

pub use types::{
	Category, CategoryMeta, Difficulty, Example, Problem, Visualization, VisualizationKind,
	format_count, tag_slug,
};

static PROBLEMS: OnceLock<Vec<Problem>> = OnceLock::new();

/// Every problem, in catalog order. Built on first use.
pub fn all_problems() -> &'static [Problem] {
	PROBLEMS.get_or_init(data::problems)
}

/// Problem with the given id.
pub fn problem_by_id(id: &str) -> Option<&'static Problem> {
	all_problems().iter().find(|p| p.id == id)
}

/// Every category with its display metadata.
pub fn categories() -> &'static [CategoryMeta] {
	&data::CATEGORIES
}

/// Display metadata of `category`.
pub fn category_meta(category: Category) -> &'static CategoryMeta {
	let index = match category {
		Category::Arrays => 0,
		Category::LinkedLists => 1,
		Category::Trees => 2,
	};
	&data::CATEGORIES[index]
}

/// Metadata for a `/categories/:category` segment.
pub fn category_by_slug(slug: &str) -> Option<&'static CategoryMeta> {
	Category::from_slug(slug).map(category_meta)
}

/// Problems filed under `category`, in catalog order.
pub fn problems_in(category: Category) -> impl Iterator<Item = &'static Problem> {
	all_problems().iter().filter(move |p| p.category == category)
}

/// Problems carrying a tag whose slug is `slug`.
pub fn problems_tagged(slug: &str) -> Vec<&'static Problem> {
	all_problems().iter().filter(|p| p.has_tag(slug)).collect()
}

/// Distinct tags in first-seen order.
pub fn all_tags() -> Vec<&'static str> {
	let mut tags: Vec<&'static str> = Vec::new();
	for tag in all_problems().iter().flat_map(|p| p.tags.iter().copied()) {
		if !tags.contains(&tag) {
			tags.push(tag);
		}
	}
	tags
}

/// Display name for a tag slug, if any problem carries it.
pub fn tag_name(slug: &str) -> Option<&'static str> {
	all_tags().into_iter().find(|t| tag_slug(t) == slug)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn ids_are_unique() {
		let ids: HashSet<_> = all_problems().iter().map(|p| p.id).collect();
		assert_eq!(ids.len(), all_problems().len());
	}

	#[test]
	fn every_category_has_meta_and_problems() {
		for category in Category::ALL {
			assert_eq!(category_meta(category).category, category);
			assert!(problems_in(category).count() > 0);
		}
	}

	#[test]
	fn lookup_by_id() {
		assert_eq!(problem_by_id("1").map(|p| p.title), Some("Two Sum"));
		assert!(problem_by_id("999").is_none());
	}

	#[test]
	fn lookup_by_category_slug() {
		assert_eq!(category_by_slug("linked-lists").map(|m| m.name), Some("Linked Lists"));
		assert!(category_by_slug("graphs").is_none());
	}

	#[test]
	fn every_algorithm_is_reachable() {
		let names: HashSet<_> = all_problems()
			.iter()
			.map(|p| p.visualization.algorithm_name())
			.collect();
		for name in [
			"two-sum",
			"max-subarray",
			"reverse",
			"add-two-numbers",
			"detect-cycle",
			"inorder",
			"preorder",
			"postorder",
			"bfs",
		] {
			assert!(names.contains(name), "no problem animates {name}");
		}
	}

	#[test]
	fn payloads_are_non_empty() {
		for p in all_problems() {
			let empty = match &p.visualization {
				Visualization::Array { array, .. } => array.is_empty(),
				Visualization::Tree { tree, .. } => tree.is_empty(),
				Visualization::LinkedList { list, .. } => list.is_empty(),
			};
			assert!(!empty, "problem {} has an empty payload", p.id);
		}
	}

	#[test]
	fn tags_resolve() {
		let hash = problems_tagged("hash-table");
		assert!(hash.iter().any(|p| p.id == "1"));
		assert_eq!(tag_name("depth-first-search"), Some("Depth-First Search"));
		assert!(tag_name("graph").is_none());
		assert!(problems_tagged("graph").is_empty());
	}
}
