//! Build-time configuration, shared with the view tree through context.

use std::time::Duration;

use log::Level;

use crate::structures::Value;

/// Settings read once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
	/// Maximum level passed to the console logger.
	pub log_level: Level,
	/// Delay between array steps while playing.
	pub array_interval: Duration,
	/// Delay between list steps while playing.
	pub list_interval: Duration,
	/// Delay between tree steps while playing.
	pub tree_interval: Duration,
	/// Two-sum target used when the field is left blank.
	pub default_target: Value,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			log_level: Level::Debug,
			array_interval: Duration::from_millis(1000),
			list_interval: Duration::from_millis(1200),
			tree_interval: Duration::from_millis(1500),
			default_target: 9,
		}
	}
}

impl VisualizerConfig {
	/// Defaults with the compile-time overrides applied: `VISUALIZER_LOG_LEVEL`
	/// and `VISUALIZER_SPEED_PERCENT` (a percentage of the default pace).
	pub fn from_build_env() -> Self {
		Self::from_overrides(
			option_env!("VISUALIZER_LOG_LEVEL"),
			option_env!("VISUALIZER_SPEED_PERCENT"),
		)
	}

	/// Apply raw override strings. Values that do not parse are ignored.
	pub fn from_overrides(log_level: Option<&str>, speed_percent: Option<&str>) -> Self {
		let mut config = Self::default();
		if let Some(level) = log_level.and_then(|s| s.trim().parse::<Level>().ok()) {
			config.log_level = level;
		}
		if let Some(speed) = speed_percent
			.and_then(|s| s.trim().parse::<u32>().ok())
			.filter(|&p| p > 0)
		{
			config = config.with_speed(speed);
		}
		config
	}

	/// Scale every interval so playback runs at `percent` of normal speed.
	pub fn with_speed(mut self, percent: u32) -> Self {
		let scale = |d: Duration| d * 100 / percent.max(1);
		self.array_interval = scale(self.array_interval);
		self.list_interval = scale(self.list_interval);
		self.tree_interval = scale(self.tree_interval);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_component_paces() {
		let config = VisualizerConfig::default();
		assert_eq!(config.array_interval, Duration::from_millis(1000));
		assert_eq!(config.list_interval, Duration::from_millis(1200));
		assert_eq!(config.tree_interval, Duration::from_millis(1500));
		assert_eq!(config.default_target, 9);
	}

	#[test]
	fn overrides_apply() {
		let config = VisualizerConfig::from_overrides(Some("warn"), Some("200"));
		assert_eq!(config.log_level, Level::Warn);
		assert_eq!(config.array_interval, Duration::from_millis(500));
		assert_eq!(config.tree_interval, Duration::from_millis(750));
	}

	#[test]
	fn bad_overrides_are_ignored() {
		let config = VisualizerConfig::from_overrides(Some("loud"), Some("0"));
		assert_eq!(config, VisualizerConfig::default());
		let config = VisualizerConfig::from_overrides(None, Some("fast"));
		assert_eq!(config, VisualizerConfig::default());
	}
}
