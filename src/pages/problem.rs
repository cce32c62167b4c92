use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use log::info;

use crate::catalog::{Problem, format_count, problem_by_id};
use crate::components::cards::{BackLink, DifficultyBadge, Missing, TagLinks};
use crate::components::visualizer::Visualizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Description,
	Visualization,
}

#[component]
fn Description(problem: &'static Problem) -> impl IntoView {
	view! {
		<section class="description">
			<h2>"Problem Statement"</h2>
			<p>{problem.description}</p>

			<Show when=move || !problem.examples.is_empty()>
				<h2>"Examples"</h2>
				{problem
					.examples
					.iter()
					.map(|example| {
						view! {
							<div class="example">
								<p><strong>"Input: "</strong><code>{example.input}</code></p>
								<p><strong>"Output: "</strong><code>{example.output}</code></p>
								<p><strong>"Explanation: "</strong>{example.explanation}</p>
							</div>
						}
					})
					.collect_view()}
			</Show>

			<Show when=move || !problem.constraints.is_empty()>
				<h2>"Constraints"</h2>
				<ul class="constraints">
					{problem
						.constraints
						.iter()
						.map(|c| view! { <li><code>{*c}</code></li> })
						.collect_view()}
				</ul>
			</Show>
		</section>
	}
}

#[component]
fn ProblemDetail(problem: &'static Problem) -> impl IntoView {
	let (tab, set_tab) = signal(Tab::Description);

	view! {
		<div class="page">
			<BackLink href="/problems" label="Back to Problems" />
			<header class="problem-header">
				<h1>{problem.id} ". " {problem.title}</h1>
				<DifficultyBadge difficulty=problem.difficulty />
				<TagLinks tags=problem.tags />
				<div class="stats">
					<span title="Time complexity">"⏱ " {problem.time_complexity}</span>
					<span title="Space complexity">"▦ " {problem.space_complexity}</span>
					{problem.likes.map(|n| view! { <span title="Likes">"★ " {format_count(n)}</span> })}
					{problem.solved.map(|n| view! { <span title="Solved">"✔ " {format_count(n)}</span> })}
				</div>
			</header>

			<nav class="tabs">
				<button
					class="tab"
					class:active=move || tab.get() == Tab::Description
					on:click=move |_| set_tab.set(Tab::Description)
				>
					"Description"
				</button>
				<button
					class="tab"
					class:active=move || tab.get() == Tab::Visualization
					on:click=move |_| set_tab.set(Tab::Visualization)
				>
					"Visualization"
				</button>
			</nav>

			{move || match tab.get() {
				Tab::Description => view! { <Description problem /> }.into_any(),
				Tab::Visualization => {
					view! { <Visualizer visualization=problem.visualization.clone() /> }.into_any()
				}
			}}
		</div>
	}
}

/// Detail page of the problem named by the `:id` segment.
#[component]
pub fn ProblemPage() -> impl IntoView {
	let params = use_params_map();
	let id = move || params.read().get("id").unwrap_or_default();

	move || {
		let id = id();
		match problem_by_id(&id) {
			Some(problem) => view! { <ProblemDetail problem /> }.into_any(),
			None => {
				info!("no problem with id `{id}`");
				view! {
					<Missing
						title="Problem Not Found"
						message=format!("There is no problem with id \"{id}\".")
						href="/problems"
						label="Return to Problems"
					/>
				}
				.into_any()
			}
		}
	}
}
