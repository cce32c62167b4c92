use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;

use super::frame::{RowState, row_state};
use crate::input::InputError;
use crate::playback::{Playback, PlaybackEvent};
use crate::trace::{Algorithm, Step};

/// Drive a [`Playback`] over `steps` from an interval timer.
///
/// The timer only exists while playing. A new step sequence rewinds the
/// cursor.
pub fn use_playback(steps: Memo<Vec<Step>>, interval: Duration) -> RwSignal<Playback> {
	let playback = RwSignal::new(Playback::new(steps.with_untracked(Vec::len)));
	let playing = Memo::new(move |_| playback.with(Playback::is_playing));
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let millis = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);

	Effect::new(move |_| {
		let len = steps.with(Vec::len);
		playback.update(|p| p.load(len));
	});

	Effect::new(move |_| {
		if !playing.get() {
			return;
		}
		let Some(window) = web_sys::window() else {
			error!("no window, playback timer not started");
			return;
		};
		let cb = Closure::<dyn FnMut()>::new(move || {
			playback.update(|p| {
				p.handle(PlaybackEvent::Tick);
			})
		});
		match window
			.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), millis)
		{
			Ok(id) => {
				debug!("playback timer started ({millis} ms)");
				// Replacing the previous closure is safe, its interval was
				// cleared before this run.
				*tick.borrow_mut() = Some(cb);
				on_cleanup(move || {
					if let Some(window) = web_sys::window() {
						window.clear_interval_with_handle(id);
					}
				});
			}
			Err(err) => error!("failed to start playback timer: {err:?}"),
		}
	});

	playback
}

#[component]
pub fn PlaybackControls(playback: RwSignal<Playback>, show_input: RwSignal<bool>) -> impl IntoView {
	let send = move |event: PlaybackEvent| {
		playback.update(|p| {
			p.handle(event);
		})
	};

	view! {
		<div class="controls">
			<button
				class="control"
				title="Customize Input"
				class:active=move || show_input.get()
				on:click=move |_| show_input.update(|open| *open = !*open)
			>
				"⚙"
			</button>
			<button class="control" title="Reset" on:click=move |_| send(PlaybackEvent::Reset)>
				"↺"
			</button>
			<button
				class="control primary"
				title={move || if playback.with(Playback::is_playing) { "Pause" } else { "Play" }}
				on:click=move |_| send(PlaybackEvent::TogglePlay)
			>
				{move || if playback.with(Playback::is_playing) { "❚❚" } else { "▶" }}
			</button>
			<button
				class="control"
				title="Step Forward"
				on:click=move |_| send(PlaybackEvent::StepForward)
			>
				"⏭"
			</button>
		</div>
	}
}

/// "Step n of m", a progress bar and the current description.
#[component]
pub fn StepProgress(steps: Memo<Vec<Step>>, playback: RwSignal<Playback>) -> impl IntoView {
	let description = move || {
		let cursor = playback.with(Playback::cursor);
		steps.with(|s| s.get(cursor).map(|step| step.description.clone()))
	};

	view! {
		<div class="step-progress">
			<div class="step-counter">
				<span>
					{move || {
						let p = playback.get();
						format!("Step {} of {}", p.cursor() + 1, p.len())
					}}
				</span>
				<div class="progress-track">
					<div
						class="progress-fill"
						style:width=move || format!("{:.1}%", playback.with(Playback::progress) * 100.0)
					/>
				</div>
			</div>
			<p class="step-description">{description}</p>
		</div>
	}
}

/// Every step, the current one emphasised and earlier ones dimmed.
///
/// Rows are rebuilt only when the steps change. A cursor move just toggles
/// their classes.
#[component]
pub fn StepLog(steps: Memo<Vec<Step>>, playback: RwSignal<Playback>) -> impl IntoView {
	let cursor = Memo::new(move |_| playback.with(Playback::cursor));

	let rows = move || {
		steps.with(|steps| {
			steps
				.iter()
				.enumerate()
				.map(|(i, step)| {
					let state = move || row_state(i, cursor.get());
					view! {
						<li
							class="step"
							class:current=move || state() == RowState::Current
							class:past=move || state() == RowState::Past
							data-action=step.action.as_str()
						>
							{step.description.clone()}
						</li>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="step-log">
			<h4>"Algorithm Steps:"</h4>
			<ol>{rows}</ol>
		</div>
	}
}

/// Selector over the algorithms of one structure type.
#[component]
pub fn AlgorithmSelect<A: Algorithm>(current: ReadSignal<A>, set_current: WriteSignal<A>) -> impl IntoView {
	let on_change = move |ev: leptos::ev::Event| {
		let name = event_target_value(&ev);
		match name.parse::<A>() {
			Ok(algorithm) => set_current.set(algorithm),
			Err(err) => error!("{err}"),
		}
	};

	view! {
		<select class="algorithm-select" on:change=on_change>
			{A::all()
				.iter()
				.map(|&algorithm| {
					view! {
						<option
							value=algorithm.as_str()
							prop:selected=move || current.get() == algorithm
						>
							{algorithm.label()}
						</option>
					}
				})
				.collect_view()}
		</select>
	}
}

/// Inline message for input the panel refused to apply.
#[component]
pub fn InputErrorMessage(error: RwSignal<Option<InputError>>) -> impl IntoView {
	move || {
		error
			.get()
			.map(|err| view! { <p class="input-error">{format!("Input not applied: {err}")}</p> })
	}
}
