use leptos::prelude::*;

use crate::catalog::categories;
use crate::components::cards::{BackLink, CategoryCard};

/// Grid of categories with their problem counts.
#[component]
pub fn Categories() -> impl IntoView {
	view! {
		<div class="page">
			<BackLink href="/" label="Back to Home" />
			<h1>"Categories"</h1>
			<p class="subtitle">"Browse problem groups by category"</p>
			<div class="card-grid">
				{categories()
					.iter()
					.map(|meta| view! { <CategoryCard meta /> })
					.collect_view()}
			</div>
		</div>
	}
}
