use leptos::prelude::*;

use crate::catalog::all_problems;
use crate::components::cards::{BackLink, ProblemCard};

/// Every problem in catalog order.
#[component]
pub fn Problems() -> impl IntoView {
	view! {
		<div class="page">
			<BackLink href="/" label="Back to Home" />
			<h1>"Problems"</h1>
			<p class="subtitle">"Pick a problem to read it and watch it run."</p>
			<div class="card-grid">
				{all_problems()
					.iter()
					.map(|problem| view! { <ProblemCard problem /> })
					.collect_view()}
			</div>
		</div>
	}
}
