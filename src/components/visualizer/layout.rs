use crate::structures::{BinaryTree, NodeId};

/// Grid cell of a node: `column` is its inorder rank, `row` its depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
	pub column: usize,
	pub row: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeLayout {
	cells: Vec<Option<Cell>>,
	pub columns: usize,
	pub rows: usize,
}

impl TreeLayout {
	pub fn cell(&self, id: NodeId) -> Option<Cell> {
		self.cells.get(id).copied().flatten()
	}

	/// Parent/child pairs, left edge before right edge.
	pub fn edges(&self, tree: &BinaryTree) -> Vec<(NodeId, NodeId)> {
		(0..tree.len())
			.filter(|&id| self.cell(id).is_some())
			.flat_map(|id| {
				[tree.left(id), tree.right(id)]
					.into_iter()
					.flatten()
					.map(move |child| (id, child))
			})
			.collect()
	}
}

/// Lay the tree out on a grid so that no two nodes share a column and
/// every child sits one row below its parent.
pub fn layout(tree: &BinaryTree) -> TreeLayout {
	let mut cells = vec![None; tree.len()];
	let mut stack: Vec<(NodeId, usize)> = Vec::new();
	let mut current = tree.root().map(|id| (id, 0));
	let mut column = 0;
	let mut rows = 0;

	while current.is_some() || !stack.is_empty() {
		while let Some((id, row)) = current {
			stack.push((id, row));
			current = tree.left(id).map(|l| (l, row + 1));
		}
		let Some((id, row)) = stack.pop() else { break };
		cells[id] = Some(Cell { column, row });
		column += 1;
		rows = rows.max(row + 1);
		current = tree.right(id).map(|r| (r, row + 1));
	}

	TreeLayout {
		cells,
		columns: column,
		rows,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn columns_follow_inorder_and_rows_follow_depth() {
		let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
		let layout = layout(&tree);
		assert_eq!(layout.columns, 3);
		assert_eq!(layout.rows, 3);
		assert_eq!(layout.cell(0), Some(Cell { column: 0, row: 0 }));
		assert_eq!(layout.cell(1), Some(Cell { column: 2, row: 1 }));
		assert_eq!(layout.cell(2), Some(Cell { column: 1, row: 2 }));
	}

	#[test]
	fn children_sit_below_and_to_the_correct_side() {
		let tree = BinaryTree::from_level_order(&[
			Some(3),
			Some(9),
			Some(20),
			None,
			None,
			Some(15),
			Some(7),
		]);
		let layout = layout(&tree);
		for (parent, child) in layout.edges(&tree) {
			let (p, c) = (layout.cell(parent).unwrap(), layout.cell(child).unwrap());
			assert_eq!(c.row, p.row + 1);
			if tree.left(parent) == Some(child) {
				assert!(c.column < p.column);
			} else {
				assert!(c.column > p.column);
			}
		}
		assert_eq!(layout.edges(&tree).len(), 4);
	}

	#[test]
	fn empty_tree_has_no_cells() {
		let layout = layout(&BinaryTree::new());
		assert_eq!((layout.columns, layout.rows), (0, 0));
		assert!(layout.cell(0).is_none());
	}
}
