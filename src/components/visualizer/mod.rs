//! Animated views over the step traces, one per structure type.

mod array;
mod controls;
mod frame;
mod layout;
mod list;
mod render;
mod tree;

use array::ArrayVisualizer;
use leptos::prelude::*;
use list::LinkedListVisualizer;
use tree::TreeVisualizer;

use crate::catalog::Visualization;

/// Pick the visualizer matching the payload.
#[component]
pub fn Visualizer(visualization: Visualization) -> impl IntoView {
	match visualization {
		Visualization::Array {
			array,
			target,
			algorithm,
		} => view! { <ArrayVisualizer array target algorithm /> }.into_any(),
		Visualization::Tree { tree, algorithm } => {
			view! { <TreeVisualizer tree algorithm /> }.into_any()
		}
		Visualization::LinkedList { list, algorithm } => {
			view! { <LinkedListVisualizer list algorithm /> }.into_any()
		}
	}
}
