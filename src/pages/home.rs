use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::{all_problems, all_tags, categories, tag_slug};
use crate::components::cards::CategoryCard;

struct Feature {
	title: &'static str,
	description: &'static str,
}

const FEATURES: [Feature; 3] = [
	Feature {
		title: "Step-by-Step Visualizations",
		description: "Watch algorithms execute with detailed explanations",
	},
	Feature {
		title: "Custom Input Support",
		description: "Test algorithms with your own data",
	},
	Feature {
		title: "Multiple Algorithms",
		description: "Arrays, trees, linked lists, and more",
	},
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let first = all_problems().first().map(|p| (p.id, p.title));

	view! {
		<div class="page home">
			<section class="hero">
				<h1>"Algorithm Visualizer"</h1>
				<p class="subtitle">
					"Learn algorithms the visual way with interactive demonstrations and comprehensive explanations."
				</p>
				<A href="/problems">
					<span class="button primary">"Browse Problems"</span>
				</A>
			</section>

			<section class="features">
				{FEATURES
					.iter()
					.map(|f| {
						view! {
							<div class="card feature">
								<h3>{f.title}</h3>
								<p>{f.description}</p>
							</div>
						}
					})
					.collect_view()}
			</section>

			<section>
				<h2>"Explore by Category"</h2>
				<div class="card-grid">
					{categories()
						.iter()
						.map(|meta| view! { <CategoryCard meta /> })
						.collect_view()}
				</div>
			</section>

			<section>
				<h2>"Browse by Tag"</h2>
				<div class="tags">
					{all_tags()
						.into_iter()
						.map(|tag| {
							view! {
								<A href=format!("/tags/{}", tag_slug(tag))>
									<span class="tag">{tag}</span>
								</A>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="cta">
				<h2>"Start Visualizing Algorithms"</h2>
				<p>"Explore interactive visualizations and test algorithms with your own data."</p>
				{first
					.map(|(id, title)| {
						view! {
							<A href=format!("/problems/{id}")>
								<span class="button">"Try " {title}</span>
							</A>
						}
					})}
			</section>
		</div>
	}
}
