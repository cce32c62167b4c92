use super::types::{Category, CategoryMeta, Difficulty, Example, Problem, Visualization};
use crate::structures::{BinaryTree, LinkedList};
use crate::trace::array::ArrayAlgorithm;
use crate::trace::list::ListAlgorithm;
use crate::trace::tree::TreeAlgorithm;

pub(super) const CATEGORIES: [CategoryMeta; 3] = [
	CategoryMeta {
		category: Category::Arrays,
		name: "Arrays",
		icon: "📊",
		color: "blue",
	},
	CategoryMeta {
		category: Category::LinkedLists,
		name: "Linked Lists",
		icon: "🔗",
		color: "purple",
	},
	CategoryMeta {
		category: Category::Trees,
		name: "Trees",
		icon: "🌳",
		color: "green",
	},
];

/// `1,null,2,3`
fn right_leaning_tree() -> BinaryTree {
	BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)])
}

/// `3,9,20,null,null,15,7`
fn balanced_tree() -> BinaryTree {
	BinaryTree::from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)])
}

pub(super) fn problems() -> Vec<Problem> {
	vec![
		Problem {
			id: "1",
			title: "Two Sum",
			difficulty: Difficulty::Easy,
			tags: &["Array", "Hash Table"],
			category: Category::Arrays,
			description: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.",
			examples: &[Example {
				input: "nums = [2,7,11,15], target = 9",
				output: "[0,1]",
				explanation: "Because nums[0] + nums[1] == 9, we return [0, 1].",
			}],
			constraints: &[
				"2 <= nums.length <= 10^4",
				"-10^9 <= nums[i] <= 10^9",
				"-10^9 <= target <= 10^9",
				"Only one valid answer exists.",
			],
			time_complexity: "O(n)",
			space_complexity: "O(n)",
			likes: Some(1250),
			solved: Some(850_000),
			visualization: Visualization::Array {
				array: vec![2, 7, 11, 15],
				target: 9,
				algorithm: ArrayAlgorithm::TwoSum,
			},
		},
		Problem {
			id: "2",
			title: "Add Two Numbers",
			difficulty: Difficulty::Medium,
			tags: &["Linked List", "Math"],
			category: Category::LinkedLists,
			description: "You are given two non-empty linked lists representing two non-negative integers. Add the two numbers and return the sum as a linked list.",
			examples: &[Example {
				input: "l1 = [2,4,3], l2 = [5,6,4]",
				output: "[7,0,8]",
				explanation: "342 + 465 = 807",
			}],
			constraints: &[
				"The number of nodes in each linked list is in the range [1, 100].",
				"0 <= Node.val <= 9",
				"It is guaranteed that the list represents a number that does not have leading zeros.",
			],
			time_complexity: "O(max(m,n))",
			space_complexity: "O(max(m,n))",
			likes: Some(890),
			solved: Some(450_000),
			visualization: Visualization::LinkedList {
				list: LinkedList::from_values(&[2, 4, 3]),
				algorithm: ListAlgorithm::AddTwoNumbers,
			},
		},
		Problem {
			id: "3",
			title: "Binary Tree Inorder Traversal",
			difficulty: Difficulty::Easy,
			tags: &["Stack", "Tree", "Depth-First Search"],
			category: Category::Trees,
			description: "Given the root of a binary tree, return the inorder traversal of its nodes' values.",
			examples: &[Example {
				input: "root = [1,null,2,3]",
				output: "[1,3,2]",
				explanation: "Inorder: Left -> Root -> Right",
			}],
			constraints: &[
				"The number of nodes in the tree is in the range [0, 100].",
				"-100 <= Node.val <= 100",
			],
			time_complexity: "O(n)",
			space_complexity: "O(n)",
			likes: Some(750),
			solved: Some(680_000),
			visualization: Visualization::Tree {
				tree: right_leaning_tree(),
				algorithm: TreeAlgorithm::Inorder,
			},
		},
		Problem {
			id: "4",
			title: "Maximum Subarray",
			difficulty: Difficulty::Medium,
			tags: &["Array", "Divide and Conquer", "Dynamic Programming"],
			category: Category::Arrays,
			description: "Given an integer array nums, find the contiguous subarray (containing at least one number) which has the largest sum and return its sum.",
			examples: &[Example {
				input: "nums = [-2,1,-3,4,-1,2,1,-5,4]",
				output: "6",
				explanation: "The subarray [4,-1,2,1] has the largest sum 6.",
			}],
			constraints: &["1 <= nums.length <= 10^5", "-10^4 <= nums[i] <= 10^4"],
			time_complexity: "O(n)",
			space_complexity: "O(1)",
			likes: Some(1800),
			solved: Some(520_000),
			visualization: Visualization::Array {
				array: vec![-2, 1, -3, 4, -1, 2, 1, -5, 4],
				target: 0,
				algorithm: ArrayAlgorithm::MaxSubarray,
			},
		},
		Problem {
			id: "5",
			title: "Reverse Linked List",
			difficulty: Difficulty::Easy,
			tags: &["Linked List", "Recursion"],
			category: Category::LinkedLists,
			description: "Given the head of a singly linked list, reverse the list, and return the reversed list.",
			examples: &[Example {
				input: "head = [1,2,3,4,5]",
				output: "[5,4,3,2,1]",
				explanation: "Every next pointer is flipped to point at the previous node.",
			}],
			constraints: &[
				"The number of nodes in the list is the range [0, 5000].",
				"-5000 <= Node.val <= 5000",
			],
			time_complexity: "O(n)",
			space_complexity: "O(1)",
			likes: Some(1500),
			solved: Some(680_000),
			visualization: Visualization::LinkedList {
				list: LinkedList::from_values(&[1, 2, 3, 4, 5]),
				algorithm: ListAlgorithm::Reverse,
			},
		},
		Problem {
			id: "6",
			title: "Linked List Cycle",
			difficulty: Difficulty::Easy,
			tags: &["Linked List", "Two Pointers", "Hash Table"],
			category: Category::LinkedLists,
			description: "Given head, the head of a linked list, determine if the linked list has a cycle in it.",
			examples: &[Example {
				input: "head = [3,2,0,-4], pos = -1",
				output: "false",
				explanation: "There is no cycle in the linked list.",
			}],
			constraints: &[
				"The number of the nodes in the list is in the range [0, 10^4].",
				"-10^5 <= Node.val <= 10^5",
			],
			time_complexity: "O(n)",
			space_complexity: "O(1)",
			likes: Some(1320),
			solved: Some(610_000),
			visualization: Visualization::LinkedList {
				list: LinkedList::from_values(&[3, 2, 0, -4]),
				algorithm: ListAlgorithm::DetectCycle,
			},
		},
		Problem {
			id: "7",
			title: "Binary Tree Preorder Traversal",
			difficulty: Difficulty::Easy,
			tags: &["Stack", "Tree", "Depth-First Search"],
			category: Category::Trees,
			description: "Given the root of a binary tree, return the preorder traversal of its nodes' values.",
			examples: &[Example {
				input: "root = [1,null,2,3]",
				output: "[1,2,3]",
				explanation: "Preorder: Root -> Left -> Right",
			}],
			constraints: &[
				"The number of nodes in the tree is in the range [0, 100].",
				"-100 <= Node.val <= 100",
			],
			time_complexity: "O(n)",
			space_complexity: "O(n)",
			likes: Some(640),
			solved: Some(590_000),
			visualization: Visualization::Tree {
				tree: right_leaning_tree(),
				algorithm: TreeAlgorithm::Preorder,
			},
		},
		Problem {
			id: "8",
			title: "Binary Tree Postorder Traversal",
			difficulty: Difficulty::Easy,
			tags: &["Stack", "Tree", "Depth-First Search"],
			category: Category::Trees,
			description: "Given the root of a binary tree, return the postorder traversal of its nodes' values.",
			examples: &[Example {
				input: "root = [1,null,2,3]",
				output: "[3,2,1]",
				explanation: "Postorder: Left -> Right -> Root",
			}],
			constraints: &[
				"The number of the nodes in the tree is in the range [0, 100].",
				"-100 <= Node.val <= 100",
			],
			time_complexity: "O(n)",
			space_complexity: "O(n)",
			likes: Some(610),
			solved: Some(540_000),
			visualization: Visualization::Tree {
				tree: right_leaning_tree(),
				algorithm: TreeAlgorithm::Postorder,
			},
		},
		Problem {
			id: "9",
			title: "Binary Tree Level Order Traversal",
			difficulty: Difficulty::Medium,
			tags: &["Tree", "Breadth-First Search"],
			category: Category::Trees,
			description: "Given the root of a binary tree, return the level order traversal of its nodes' values (from left to right, level by level).",
			examples: &[Example {
				input: "root = [3,9,20,null,null,15,7]",
				output: "[[3],[9,20],[15,7]]",
				explanation: "Each level is read left to right before moving down.",
			}],
			constraints: &[
				"The number of nodes in the tree is in the range [0, 2000].",
				"-1000 <= Node.val <= 1000",
			],
			time_complexity: "O(n)",
			space_complexity: "O(n)",
			likes: Some(980),
			solved: Some(720_000),
			visualization: Visualization::Tree {
				tree: balanced_tree(),
				algorithm: TreeAlgorithm::Bfs,
			},
		},
	]
}
