use crate::scene::Scenes;
use crate::state::PlaybackState;
use crate::timer::Interval;

/// Owns the current scene index and the play/pause state.
///
/// The index is always a valid offset into the scene list it was built from:
/// the list is non-empty and every move wraps around.
pub struct Sequencer {
    len: usize,
    index: usize,
    state: PlaybackState,
    autoplay: Interval,
    mounted: bool,
}

impl Sequencer {
    pub fn new(scenes: &Scenes, autoplay_period: f32) -> Self {
        Self {
            len: scenes.len(),
            index: 0,
            state: PlaybackState::Playing,
            autoplay: Interval::new(autoplay_period),
            mounted: false,
        }
    }

    /// Schedules autoplay if the reel is playing.
    pub fn start(&mut self) {
        self.mounted = true;
        if self.state.is_playing() {
            self.autoplay.start();
        }
    }

    /// Cancels autoplay. Manual navigation keeps working.
    pub fn stop(&mut self) {
        self.mounted = false;
        self.autoplay.stop();
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Flips between playing and paused and returns the new state.
    /// Pausing drops the pending autoplay tick; resuming waits a full period.
    pub fn toggle_play(&mut self) -> PlaybackState {
        self.state = self.state.toggled();
        match self.state {
            PlaybackState::Playing if self.mounted => self.autoplay.start(),
            PlaybackState::Playing => {}
            PlaybackState::Paused => self.autoplay.stop(),
        }
        self.state
    }

    /// Runs autoplay for `dt` seconds. Returns true when the index moved.
    pub fn update(&mut self, dt: f32) -> bool {
        let ticks = self.autoplay.tick(dt);
        for _ in 0..ticks {
            self.advance();
        }
        ticks > 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Horizontal track offset in panel widths (-1.0 == -100%).
    pub fn track_offset(&self) -> f32 {
        -(self.index as f32)
    }
}
