//! Leptos client-side app wiring and routes.
//!
//! Everything under [`catalog`], [`input`], [`playback`], [`structures`]
//! and [`trace`] is plain Rust and runs on the host; the components and
//! pages only exist in the browser.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

/// Problems, categories and tags shown by the app.
pub mod catalog;
/// Timing and logging settings.
pub mod config;
/// Parsing of user-edited inputs.
pub mod input;
/// Step cursor state machine.
pub mod playback;
/// Arrays, lists and trees the algorithms run on.
pub mod structures;
/// Step traces for each algorithm.
pub mod trace;

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::config::VisualizerConfig;
use crate::pages::categories::Categories;
use crate::pages::category::Category;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::problem::ProblemPage;
use crate::pages::problems::Problems;
use crate::pages::tag::Tag;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &VisualizerConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
}

/// An app router over the catalog pages which handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(VisualizerConfig::from_build_env());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Algorithm Visualizer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="top-nav">
				<A href="/">
					<span class="brand">"Algorithm Visualizer"</span>
				</A>
				<A href="/problems">"Problems"</A>
				<A href="/categories">"Categories"</A>
			</nav>
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/problems") view=Problems />
					<Route path=path!("/problems/:id") view=ProblemPage />
					<Route path=path!("/categories") view=Categories />
					<Route path=path!("/categories/:category") view=Category />
					<Route path=path!("/tags/:tag") view=Tag />
				</Routes>
			</main>
		</Router>
	}
}
