use algorithm_visualizer::config::VisualizerConfig;
use algorithm_visualizer::{App, init_logging};

fn main() {
	init_logging(&VisualizerConfig::from_build_env());
	leptos::mount::mount_to_body(App);
}
