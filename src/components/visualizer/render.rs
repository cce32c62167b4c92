use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::frame::NodeState;
use super::layout::TreeLayout;
use crate::structures::BinaryTree;

pub const NODE_RADIUS: f64 = 22.0;
const COLUMN_WIDTH: f64 = 64.0;
const ROW_HEIGHT: f64 = 84.0;
const PADDING: f64 = 32.0;
const MIN_WIDTH: f64 = 320.0;

/// Canvas size that fits `layout` with padding on every side.
pub fn canvas_size(layout: &TreeLayout) -> (f64, f64) {
	let width = (layout.columns as f64 * COLUMN_WIDTH + 2.0 * PADDING).max(MIN_WIDTH);
	// the last row only needs room for its nodes, not a full row gap
	let rows = layout.rows.max(1) as f64;
	let height = (rows - 1.0) * ROW_HEIGHT + 2.0 * NODE_RADIUS + 2.0 * PADDING;
	(width, height)
}

fn center(layout: &TreeLayout, width: f64, column: usize, row: usize) -> (f64, f64) {
	let used = layout.columns as f64 * COLUMN_WIDTH;
	let left = (width - used) / 2.0;
	(
		left + (column as f64 + 0.5) * COLUMN_WIDTH,
		PADDING + NODE_RADIUS + row as f64 * ROW_HEIGHT,
	)
}

fn fill_color(state: NodeState) -> &'static str {
	match state {
		NodeState::Pending => "#1f2937",
		NodeState::Visited => "#10b981",
		NodeState::Current => "#3b82f6",
	}
}

pub fn render(
	ctx: &CanvasRenderingContext2d,
	tree: &BinaryTree,
	layout: &TreeLayout,
	states: &[NodeState],
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	draw_edges(ctx, tree, layout, states, width);
	draw_nodes(ctx, tree, layout, states, width);
}

fn draw_edges(
	ctx: &CanvasRenderingContext2d,
	tree: &BinaryTree,
	layout: &TreeLayout,
	states: &[NodeState],
	width: f64,
) {
	for (parent, child) in layout.edges(tree) {
		let (Some(p), Some(c)) = (layout.cell(parent), layout.cell(child)) else {
			continue;
		};
		let (x1, y1) = center(layout, width, p.column, p.row);
		let (x2, y2) = center(layout, width, c.column, c.row);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		// Edges into nodes not reached yet are dashed
		let reached = states.get(child).is_some_and(|s| *s != NodeState::Pending);
		let dash = if reached {
			js_sys::Array::new()
		} else {
			js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0))
		};
		let _ = ctx.set_line_dash(&dash);
		ctx.set_stroke_style_str(if reached {
			"rgba(16, 185, 129, 0.8)"
		} else {
			"rgba(255, 255, 255, 0.3)"
		});
		ctx.set_line_width(2.0);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(
	ctx: &CanvasRenderingContext2d,
	tree: &BinaryTree,
	layout: &TreeLayout,
	states: &[NodeState],
	width: f64,
) {
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for id in 0..tree.len() {
		let Some(cell) = layout.cell(id) else {
			continue;
		};
		let (x, y) = center(layout, width, cell.column, cell.row);
		let state = states.get(id).copied().unwrap_or_default();
		let radius = if state == NodeState::Current {
			NODE_RADIUS * 1.15
		} else {
			NODE_RADIUS
		};

		if state == NodeState::Current {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 6.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str("rgba(59, 130, 246, 0.25)");
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill_color(state));
		ctx.fill();
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font("bold 16px sans-serif");
		let _ = ctx.fill_text(&tree.value(id).to_string(), x, y);
	}
}
