use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use log::info;

use crate::catalog::{problems_tagged, tag_name};
use crate::components::cards::{BackLink, Missing, ProblemCard};

/// Problems carrying the tag named by the `:tag` slug.
#[component]
pub fn Tag() -> impl IntoView {
	let params = use_params_map();
	let slug = move || params.read().get("tag").unwrap_or_default();

	move || {
		let slug = slug();
		let Some(name) = tag_name(&slug) else {
			info!("no tag `{slug}`");
			return view! {
				<Missing
					title="Tag Not Found"
					message=format!("No problem is tagged \"{slug}\".")
					href="/problems"
					label="Return to Problems"
				/>
			}
			.into_any();
		};

		view! {
			<div class="page">
				<BackLink href="/problems" label="Back to Problems" />
				<h1>"#" {name}</h1>
				<div class="card-grid">
					{problems_tagged(&slug)
						.into_iter()
						.map(|problem| view! { <ProblemCard problem /> })
						.collect_view()}
				</div>
			</div>
		}
		.into_any()
	}
}
