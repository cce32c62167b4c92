use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use log::info;

use crate::catalog::{category_by_slug, problems_in};
use crate::components::cards::{BackLink, Missing, ProblemCard};

/// Problems of the category named by the `:category` segment.
#[component]
pub fn Category() -> impl IntoView {
	let params = use_params_map();
	let slug = move || params.read().get("category").unwrap_or_default();

	move || {
		let slug = slug();
		let Some(meta) = category_by_slug(&slug) else {
			info!("no category `{slug}`");
			return view! {
				<Missing
					title="Category Not Found"
					message=format!("There is no category called \"{slug}\".")
					href="/categories"
					label="Return to Categories"
				/>
			}
			.into_any();
		};

		view! {
			<div class="page">
				<BackLink href="/categories" label="Back to Categories" />
				<h1 class=meta.accent_class()>{meta.icon} " " {meta.name}</h1>
				<div class="card-grid">
					{problems_in(meta.category)
						.map(|problem| view! { <ProblemCard problem /> })
						.collect_view()}
				</div>
			</div>
		}
		.into_any()
	}
}
