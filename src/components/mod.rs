pub mod cards;
pub mod visualizer;
