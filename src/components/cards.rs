//! Small pieces shared by the pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::{CategoryMeta, Difficulty, Problem, problems_in, tag_slug};

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> impl IntoView {
	view! { <span class=difficulty.css_class()>{difficulty.as_str()}</span> }
}

/// Tag chips linking to their tag pages.
#[component]
pub fn TagLinks(tags: &'static [&'static str]) -> impl IntoView {
	view! {
		<div class="tags">
			{tags
				.iter()
				.map(|tag| {
					view! {
						<A href=format!("/tags/{}", tag_slug(tag))>
							<span class="tag">{*tag}</span>
						</A>
					}
				})
				.collect_view()}
		</div>
	}
}

#[component]
pub fn BackLink(href: &'static str, label: &'static str) -> impl IntoView {
	view! {
		<A href=href>
			<span class="back-link">"← " {label}</span>
		</A>
	}
}

/// In-page replacement for a lookup that found nothing.
#[component]
pub fn Missing(
	title: &'static str,
	#[prop(into)] message: String,
	href: &'static str,
	label: &'static str,
) -> impl IntoView {
	view! {
		<div class="missing">
			<h1>{title}</h1>
			<p>{message}</p>
			<BackLink href label />
		</div>
	}
}

/// Summary card for one problem, linking to its detail page.
#[component]
pub fn ProblemCard(problem: &'static Problem) -> impl IntoView {
	view! {
		<div class="card problem-card">
			<div class="card-header">
				<A href=format!("/problems/{}", problem.id)>
					<h3>{problem.id} ". " {problem.title}</h3>
				</A>
				<DifficultyBadge difficulty=problem.difficulty />
			</div>
			<p class="card-description">{problem.description}</p>
			<TagLinks tags=problem.tags />
			<div class="complexity">
				<span>"Time: " {problem.time_complexity}</span>
				<span>"Space: " {problem.space_complexity}</span>
			</div>
		</div>
	}
}

/// Category tile with its problem count.
#[component]
pub fn CategoryCard(meta: &'static CategoryMeta) -> impl IntoView {
	let count = problems_in(meta.category).count();
	let label = if count == 1 { "problem" } else { "problems" };

	view! {
		<A href=format!("/categories/{}", meta.slug())>
			<div class=format!("card category-card {}", meta.accent_class())>
				<div class="icon">{meta.icon}</div>
				<h3>{meta.name}</h3>
				<span class="count">{format!("{count} {label}")}</span>
			</div>
		</A>
	}
}
