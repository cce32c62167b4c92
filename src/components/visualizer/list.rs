use leptos::prelude::*;
use log::{debug, warn};

use super::controls::{
	AlgorithmSelect, InputErrorMessage, PlaybackControls, StepLog, StepProgress, use_playback,
};
use super::frame::{NodeState, format_result, node_states};
use crate::config::VisualizerConfig;
use crate::input::{InputError, join_values, parse_list};
use crate::playback::{Playback, PlaybackEvent};
use crate::structures::{LinkedList, Value};
use crate::trace::list::{self, ListAlgorithm};
use crate::trace::result_until;

/// Value of the node the tail links back to, if the list has a cycle.
fn cycle_target(list: &LinkedList) -> Option<Value> {
	let tail = list.ids().last()?;
	list.next(tail).map(|id| list.value(id))
}

/// Node boxes joined by arrows.
#[component]
pub fn LinkedListVisualizer(list: LinkedList, algorithm: ListAlgorithm) -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default();
	let (nodes, set_nodes) = signal(list);
	let (algorithm, set_algorithm) = signal(algorithm);

	let steps = Memo::new(move |_| {
		let algorithm = algorithm.get();
		nodes.with(|list| list::generate(algorithm, list))
	});
	let playback = use_playback(steps, config.list_interval);

	let show_input = RwSignal::new(false);
	let error = RwSignal::new(None::<InputError>);
	let list_text = RwSignal::new(nodes.with_untracked(|l| join_values(&l.values())));

	let apply = move |_| match parse_list(&list_text.get()) {
		Ok(parsed) => {
			debug!("list input applied: {} nodes", parsed.len());
			set_nodes.set(parsed);
			playback.update(|p| {
				p.handle(PlaybackEvent::Reset);
			});
			error.set(None);
			show_input.set(false);
		}
		Err(err) => {
			warn!("list input rejected: {err}");
			error.set(Some(err));
		}
	};

	let chain = move || {
		let cursor = playback.with(Playback::cursor);
		nodes.with(|list| {
			let states = steps.with(|steps| node_states(list.len(), steps, cursor));
			let ids: Vec<_> = list.ids().collect();
			let last = ids.len().saturating_sub(1);
			let boxes = ids
				.into_iter()
				.enumerate()
				.map(|(i, id)| {
					let state = states.get(id).copied().unwrap_or(NodeState::Pending);
					view! {
						<div class=state.css_class()>{list.value(id)}</div>
						{(i < last).then(|| view! { <span class="arrow">"→"</span> })}
					}
				})
				.collect_view();
			let tail = match cycle_target(list) {
				Some(value) => format!("↺ {value}"),
				None => "→ null".to_string(),
			};
			view! {
				{boxes}
				<span class="arrow tail">{tail}</span>
			}
		})
	};

	let result = move || {
		let cursor = playback.with(Playback::cursor);
		let digits = steps.with(|s| result_until(s, cursor))?;
		Some(view! {
			<div class="result">
				<h4>"Result:"</h4>
				<span>{format_result(&digits)}</span>
			</div>
		})
	};

	view! {
		<div class="visualizer">
			<div class="visualizer-header">
				<h3>"Linked List Visualization"</h3>
				<AlgorithmSelect current=algorithm set_current=set_algorithm />
				<PlaybackControls playback show_input />
			</div>

			<Show when=move || show_input.get()>
				<div class="input-panel">
					<h4>"Customize Linked List"</h4>
					<label>
						"Values (comma-separated numbers)"
						<input
							type="text"
							placeholder="1, 2, 3, 4, 5"
							prop:value=move || list_text.get()
							on:input=move |ev| list_text.set(event_target_value(&ev))
						/>
					</label>
					<InputErrorMessage error />
					<button class="apply" on:click=apply>
						"Apply Changes"
					</button>
				</div>
			</Show>

			<StepProgress steps playback />
			<div class="list-row">{chain}</div>
			{result}
			<StepLog steps playback />
		</div>
	}
}
