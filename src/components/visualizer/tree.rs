use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::controls::{
	AlgorithmSelect, InputErrorMessage, PlaybackControls, StepLog, StepProgress, use_playback,
};
use super::frame::node_states;
use super::layout::layout;
use super::render;
use crate::config::VisualizerConfig;
use crate::input::{InputError, parse_tree};
use crate::playback::{Playback, PlaybackEvent};
use crate::structures::BinaryTree;
use crate::trace::{Step, result_until};
use crate::trace::tree::{self, TreeAlgorithm};

/// Canvas drawing of `tree`, redrawn whenever the tree or the cursor moves.
#[component]
fn TreeCanvas(
	tree: ReadSignal<BinaryTree>,
	steps: Memo<Vec<Step>>,
	playback: RwSignal<Playback>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let cursor = playback.with(Playback::cursor);

		tree.with(|tree| {
			let layout = layout(tree);
			let (w, h) = render::canvas_size(&layout);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			let ctx = match canvas.get_context("2d") {
				Ok(Some(ctx)) => ctx,
				Ok(None) => {
					error!("canvas has no 2d context");
					return;
				}
				Err(err) => {
					error!("failed to get canvas context: {err:?}");
					return;
				}
			};
			let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
				error!("2d context is not a CanvasRenderingContext2d");
				return;
			};

			let states = steps.with(|steps| node_states(tree.len(), steps, cursor));
			render::render(&ctx, tree, &layout, &states, w, h);
		});
	});

	view! { <canvas class="tree-canvas" node_ref=canvas_ref /> }
}

#[component]
pub fn TreeVisualizer(tree: BinaryTree, algorithm: TreeAlgorithm) -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default();
	let (shape, set_shape) = signal(tree);
	let (algorithm, set_algorithm) = signal(algorithm);

	let steps = Memo::new(move |_| {
		let algorithm = algorithm.get();
		shape.with(|tree| tree::generate(algorithm, tree))
	});
	let playback = use_playback(steps, config.tree_interval);

	let show_input = RwSignal::new(false);
	let error = RwSignal::new(None::<InputError>);
	let tree_text = RwSignal::new(shape.with_untracked(BinaryTree::to_level_order_string));

	let apply = move |_| match parse_tree(&tree_text.get()) {
		Ok(parsed) => {
			debug!("tree input applied: {} nodes, depth {}", parsed.len(), parsed.depth());
			set_shape.set(parsed);
			playback.update(|p| {
				p.handle(PlaybackEvent::Reset);
			});
			error.set(None);
			show_input.set(false);
		}
		Err(err) => {
			warn!("tree input rejected: {err}");
			error.set(Some(err));
		}
	};

	let order = move || {
		let cursor = playback.with(Playback::cursor);
		let visited = steps.with(|s| result_until(s, cursor))?;
		let chips = visited
			.into_iter()
			.map(|value| view! { <span class="chip">{value}</span> })
			.collect_view();
		Some(view! {
			<div class="traversal-order">
				<h4>"Traversal Order:"</h4>
				<div class="chips">{chips}</div>
			</div>
		})
	};

	view! {
		<div class="visualizer">
			<div class="visualizer-header">
				<h3>"Tree Traversal Visualization"</h3>
				<AlgorithmSelect current=algorithm set_current=set_algorithm />
				<PlaybackControls playback show_input />
			</div>

			<Show when=move || show_input.get()>
				<div class="input-panel">
					<h4>"Customize Tree"</h4>
					<label>
						"Level order (use null for missing children)"
						<input
							type="text"
							placeholder="1, null, 2, 3"
							prop:value=move || tree_text.get()
							on:input=move |ev| tree_text.set(event_target_value(&ev))
						/>
					</label>
					<InputErrorMessage error />
					<button class="apply" on:click=apply>
						"Apply Changes"
					</button>
				</div>
			</Show>

			<StepProgress steps playback />
			<div class="tree-stage">
				<TreeCanvas tree=shape steps playback />
			</div>
			{order}
			<StepLog steps playback />
		</div>
	}
}
