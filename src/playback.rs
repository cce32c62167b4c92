//! Play/pause/step/reset cursor over a step sequence.
//!
//! The machine owns no timer. Whoever drives it sends [`PlaybackEvent::Tick`]
//! at its own pace while [`Playback::is_playing`] holds.

/// Where the cursor machine is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	/// Nothing played yet, cursor at the first step.
	#[default]
	Idle,
	/// Advancing on every tick.
	Playing,
	/// Stopped part way through.
	Paused,
	/// Cursor on the last step.
	Finished,
}

/// Input to [`Playback::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
	/// Play button: start, pause, or replay from the start once finished.
	TogglePlay,
	/// Timer fired.
	Tick,
	/// Advance one step by hand.
	StepForward,
	/// Rewind to the first step.
	Reset,
}

/// Cursor over `len` steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
	state: PlaybackState,
	cursor: usize,
	len: usize,
}

impl Playback {
	/// Idle at the first of `len` steps.
	pub fn new(len: usize) -> Self {
		Self {
			state: PlaybackState::Idle,
			cursor: 0,
			len,
		}
	}

	/// Replace the sequence being played. Always rewinds.
	pub fn load(&mut self, len: usize) {
		*self = Self::new(len);
	}

	/// Current state.
	pub fn state(&self) -> PlaybackState {
		self.state
	}

	/// Index of the step on screen.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether there are no steps at all.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Whether ticks advance the cursor.
	pub fn is_playing(&self) -> bool {
		self.state == PlaybackState::Playing
	}

	fn last(&self) -> usize {
		self.len.saturating_sub(1)
	}

	fn at_end(&self) -> bool {
		self.cursor >= self.last()
	}

	/// Fraction of the sequence shown so far, in `0.0..=1.0`.
	pub fn progress(&self) -> f64 {
		if self.len == 0 {
			return 0.0;
		}
		(self.cursor + 1) as f64 / self.len as f64
	}

	/// Apply `event` and return the resulting state.
	pub fn handle(&mut self, event: PlaybackEvent) -> PlaybackState {
		match event {
			PlaybackEvent::TogglePlay => self.toggle(),
			PlaybackEvent::Tick => {
				if self.is_playing() {
					self.advance();
				}
			}
			PlaybackEvent::StepForward => {
				if !self.at_end() {
					self.advance();
					if self.state == PlaybackState::Idle {
						self.state = PlaybackState::Paused;
					}
				}
			}
			PlaybackEvent::Reset => {
				self.cursor = 0;
				self.state = PlaybackState::Idle;
			}
		}
		self.state
	}

	fn toggle(&mut self) {
		if self.is_playing() {
			self.state = PlaybackState::Paused;
			return;
		}
		if self.at_end() {
			self.cursor = 0;
		}
		self.state = if self.at_end() {
			PlaybackState::Finished
		} else {
			PlaybackState::Playing
		};
	}

	fn advance(&mut self) {
		if !self.at_end() {
			self.cursor += 1;
		}
		if self.at_end() {
			self.state = PlaybackState::Finished;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plays_to_the_end_and_stops() {
		let mut p = Playback::new(3);
		assert_eq!(p.handle(PlaybackEvent::TogglePlay), PlaybackState::Playing);
		assert_eq!(p.handle(PlaybackEvent::Tick), PlaybackState::Playing);
		assert_eq!(p.cursor(), 1);
		assert_eq!(p.handle(PlaybackEvent::Tick), PlaybackState::Finished);
		assert_eq!(p.cursor(), 2);
		assert_eq!(p.handle(PlaybackEvent::Tick), PlaybackState::Finished);
		assert_eq!(p.cursor(), 2);
	}

	#[test]
	fn play_from_finished_restarts() {
		let mut p = Playback::new(2);
		p.handle(PlaybackEvent::StepForward);
		assert_eq!(p.state(), PlaybackState::Finished);
		assert_eq!(p.handle(PlaybackEvent::TogglePlay), PlaybackState::Playing);
		assert_eq!(p.cursor(), 0);
	}

	#[test]
	fn pause_and_resume() {
		let mut p = Playback::new(5);
		p.handle(PlaybackEvent::TogglePlay);
		p.handle(PlaybackEvent::Tick);
		assert_eq!(p.handle(PlaybackEvent::TogglePlay), PlaybackState::Paused);
		p.handle(PlaybackEvent::Tick);
		assert_eq!(p.cursor(), 1);
		assert_eq!(p.handle(PlaybackEvent::TogglePlay), PlaybackState::Playing);
		assert_eq!(p.cursor(), 1);
	}

	#[test]
	fn ticks_are_ignored_unless_playing() {
		let mut p = Playback::new(4);
		assert_eq!(p.handle(PlaybackEvent::Tick), PlaybackState::Idle);
		assert_eq!(p.cursor(), 0);
	}

	#[test]
	fn step_forward_from_idle_pauses() {
		let mut p = Playback::new(4);
		assert_eq!(p.handle(PlaybackEvent::StepForward), PlaybackState::Paused);
		assert_eq!(p.cursor(), 1);
	}

	#[test]
	fn step_forward_while_playing_keeps_playing() {
		let mut p = Playback::new(4);
		p.handle(PlaybackEvent::TogglePlay);
		assert_eq!(p.handle(PlaybackEvent::StepForward), PlaybackState::Playing);
	}

	#[test]
	fn reset_and_load_rewind() {
		let mut p = Playback::new(4);
		p.handle(PlaybackEvent::TogglePlay);
		p.handle(PlaybackEvent::Tick);
		assert_eq!(p.handle(PlaybackEvent::Reset), PlaybackState::Idle);
		assert_eq!(p.cursor(), 0);
		p.handle(PlaybackEvent::StepForward);
		p.load(7);
		assert_eq!(p, Playback::new(7));
	}

	#[test]
	fn single_step_sequence_finishes_immediately() {
		let mut p = Playback::new(1);
		assert_eq!(p.handle(PlaybackEvent::TogglePlay), PlaybackState::Finished);
		assert_eq!(p.progress(), 1.0);
	}

	#[test]
	fn progress() {
		let mut p = Playback::new(4);
		assert_eq!(p.progress(), 0.25);
		p.handle(PlaybackEvent::StepForward);
		assert_eq!(p.progress(), 0.5);
		assert_eq!(Playback::new(0).progress(), 0.0);
	}
}
