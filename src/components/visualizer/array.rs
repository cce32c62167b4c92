use leptos::prelude::*;
use log::{debug, warn};

use super::controls::{
	AlgorithmSelect, InputErrorMessage, PlaybackControls, StepLog, StepProgress, use_playback,
};
use super::frame::format_result;
use crate::config::VisualizerConfig;
use crate::input::{InputError, join_values, parse_array, parse_target};
use crate::playback::{Playback, PlaybackEvent};
use crate::structures::Value;
use crate::trace::array::{self, ArrayAlgorithm};
use crate::trace::result_until;

/// Row of value cells with the current step's highlighted and compared
/// indices emphasised.
#[component]
pub fn ArrayVisualizer(
	array: Vec<Value>,
	target: Value,
	algorithm: ArrayAlgorithm,
) -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default();
	let (values, set_values) = signal(array);
	// payloads that ignore the target still get a sensible one for two-sum
	let initial_target = if algorithm.uses_target() {
		target
	} else {
		config.default_target
	};
	let (target, set_target) = signal(initial_target);
	let (algorithm, set_algorithm) = signal(algorithm);

	let steps = Memo::new(move |_| {
		let (algorithm, target) = (algorithm.get(), target.get());
		values.with(|values| array::generate(algorithm, values, target))
	});
	let playback = use_playback(steps, config.array_interval);

	let show_input = RwSignal::new(false);
	let error = RwSignal::new(None::<InputError>);
	let array_text = RwSignal::new(values.with_untracked(|v| join_values(v)));
	let target_text = RwSignal::new(target.get_untracked().to_string());

	let apply = move |_| {
		let parsed = parse_array(&array_text.get()).and_then(|parsed| {
			let target = if algorithm.get().uses_target() {
				match target_text.get().trim() {
					"" => config.default_target,
					text => parse_target(text)?,
				}
			} else {
				target.get()
			};
			Ok((parsed, target))
		});
		match parsed {
			Ok((parsed, new_target)) => {
				debug!("array input applied: {} values, target {new_target}", parsed.len());
				set_values.set(parsed);
				set_target.set(new_target);
				playback.update(|p| {
					p.handle(PlaybackEvent::Reset);
				});
				error.set(None);
				show_input.set(false);
			}
			Err(err) => {
				warn!("array input rejected: {err}");
				error.set(Some(err));
			}
		}
	};

	let cells = move || {
		let cursor = playback.with(Playback::cursor);
		let (highlighted, comparing) = steps.with(|steps| {
			steps
				.get(cursor)
				.map(|s| (s.highlighted.clone(), s.comparing.clone()))
				.unwrap_or_default()
		});
		values
			.get()
			.into_iter()
			.enumerate()
			.map(|(i, value)| {
				let lit = highlighted.contains(&i);
				let compared = !lit && comparing.contains(&i);
				view! {
					<div class="cell" class:highlighted=lit class:comparing=compared>
						<span class="cell-index">{i}</span>
						{value}
					</div>
				}
			})
			.collect_view()
	};

	let result = move || {
		let cursor = playback.with(Playback::cursor);
		let result = steps.with(|s| result_until(s, cursor))?;
		let text = match algorithm.get() {
			ArrayAlgorithm::TwoSum => format!("Result: {}", format_result(&result)),
			ArrayAlgorithm::MaxSubarray => match result.first() {
				Some(max) => format!("Max sum: {max}"),
				None => return None,
			},
		};
		Some(view! { <div class="result">{text}</div> })
	};

	view! {
		<div class="visualizer">
			<div class="visualizer-header">
				<h3>"Array Visualization"</h3>
				<AlgorithmSelect current=algorithm set_current=set_algorithm />
				<PlaybackControls playback show_input />
			</div>

			<Show when=move || show_input.get()>
				<div class="input-panel">
					<h4>"Customize Input"</h4>
					<label>
						"Array (comma-separated numbers)"
						<input
							type="text"
							placeholder="2, 7, 11, 15"
							prop:value=move || array_text.get()
							on:input=move |ev| array_text.set(event_target_value(&ev))
						/>
					</label>
					<Show when=move || algorithm.get().uses_target()>
						<label>
							"Target Sum"
							<input
								type="number"
								placeholder="9"
								prop:value=move || target_text.get()
								on:input=move |ev| target_text.set(event_target_value(&ev))
							/>
						</label>
					</Show>
					<InputErrorMessage error />
					<button class="apply" on:click=apply>
						"Apply Changes"
					</button>
				</div>
			</Show>

			<StepProgress steps playback />
			<div class="array-row">{cells}</div>
			<div class="array-summary">
				<Show when=move || algorithm.get().uses_target()>
					<p class="target">{move || format!("Target: {}", target.get())}</p>
				</Show>
				{result}
			</div>
			<StepLog steps playback />
		</div>
	}
}
