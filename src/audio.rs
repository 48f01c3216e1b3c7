use std::path::Path;

use raylib::prelude::*;
use tracing::{debug, info};

use crate::error::ReelError;

/// Background music that follows the play/pause state of the reel.
pub trait Soundtrack {
    fn play(&mut self) -> Result<(), ReelError>;
    fn pause(&mut self);
    /// Called once per frame; streamed tracks refill their buffers here.
    fn pump(&mut self) {}
}

/// Starts or pauses `track` to match `playing`.
/// A track that refuses to start is left alone; the reel keeps going silently.
pub fn sync(track: &mut dyn Soundtrack, playing: bool) {
    if playing {
        if let Err(e) = track.play() {
            debug!("soundtrack did not start: {}", e);
        }
    } else {
        track.pause();
    }
}

/// A looping music stream played through the raylib audio device.
pub struct MusicTrack<'aud> {
    music: Music<'aud>,
    started: bool,
}

impl<'aud> MusicTrack<'aud> {
    pub fn load(audio: &'aud RaylibAudio, path: &Path) -> Result<Self, ReelError> {
        let file = path
            .to_str()
            .ok_or_else(|| ReelError::Audio(format!("path is not valid UTF-8: {:?}", path)))?;
        let music = audio
            .new_music(file)
            .map_err(|e| ReelError::Audio(format!("failed to load {:?}: {:?}", path, e)))?;
        info!(?path, "loaded soundtrack");
        Ok(Self { music, started: false })
    }
}

impl Soundtrack for MusicTrack<'_> {
    fn play(&mut self) -> Result<(), ReelError> {
        if self.started {
            self.music.resume_stream();
        } else {
            // raylib music streams loop unless told otherwise
            self.music.play_stream();
            self.started = true;
        }
        if self.music.is_stream_playing() {
            Ok(())
        } else {
            Err(ReelError::Audio("music stream is not playing".to_string()))
        }
    }

    fn pause(&mut self) {
        if self.started {
            self.music.pause_stream();
        }
    }

    fn pump(&mut self) {
        if self.started {
            self.music.update_stream();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Refusing {
        attempts: u32,
        pauses: u32,
    }

    impl Soundtrack for Refusing {
        fn play(&mut self) -> Result<(), ReelError> {
            self.attempts += 1;
            Err(ReelError::Audio("blocked".to_string()))
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn refused_playback_is_swallowed_without_retry() {
        let mut track = Refusing::default();
        sync(&mut track, true);
        assert_eq!(track.attempts, 1);
        sync(&mut track, false);
        assert_eq!(track.pauses, 1);
    }
}
