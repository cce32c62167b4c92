use leptos::prelude::*;

use crate::components::cards::Missing;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Missing
			title="Page Not Found"
			message="Nothing lives at this address."
			href="/"
			label="Back to Home"
		/>
	}
}
