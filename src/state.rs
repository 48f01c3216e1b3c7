#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    Playing, // Autoplay advances the reel
    Paused,  // Only manual navigation moves the reel
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}
