use std::cell::RefCell;
use std::rc::Rc;

use morning_reel::audio::Soundtrack;
use morning_reel::config::ReelConfig;
use morning_reel::controls::Control;
use morning_reel::emitter::{Emitter, EmitterSpec};
use morning_reel::engine::Engine;
use morning_reel::error::ReelError;
use morning_reel::reel::ReelEngine;
use morning_reel::scene::Scenes;
use morning_reel::sequencer::Sequencer;
use morning_reel::state::PlaybackState;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Helpers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioCall {
    Play,
    Pause,
}

/// Records every call; refuses to play when `blocked`.
struct FakeTrack {
    calls: Rc<RefCell<Vec<AudioCall>>>,
    blocked: bool,
}

impl Soundtrack for FakeTrack {
    fn play(&mut self) -> Result<(), ReelError> {
        self.calls.borrow_mut().push(AudioCall::Play);
        if self.blocked {
            Err(ReelError::Audio("autoplay blocked".to_string()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().push(AudioCall::Pause);
    }
}

fn engine_with_track(blocked: bool) -> (ReelEngine<'static>, Rc<RefCell<Vec<AudioCall>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let track = FakeTrack { calls: Rc::clone(&calls), blocked };
    let engine = ReelEngine::new(Scenes::morning(), &ReelConfig::default(), 1)
        .with_soundtrack(Box::new(track));
    (engine, calls)
}

// ============================================================================
// Sequencer scenarios
// ============================================================================

#[test]
fn test_three_autoplay_periods_reach_fourth_scene() {
    let scenes = Scenes::morning();
    let mut sequencer = Sequencer::new(&scenes, 4.2);
    sequencer.start();
    for _ in 0..3 {
        sequencer.update(4.2);
    }
    assert_eq!(sequencer.index(), 3);
}

#[test]
fn test_retreat_from_first_scene_wraps_to_last() {
    let scenes = Scenes::morning();
    let mut sequencer = Sequencer::new(&scenes, 4.2);
    sequencer.retreat();
    assert_eq!(sequencer.index(), scenes.len() - 1);
}

#[test]
fn test_engine_autoplay_announces_each_scene() {
    let mut engine = ReelEngine::new(Scenes::morning(), &ReelConfig::default(), 3);
    engine.mount();
    engine.take_announcement();

    let mut seen = Vec::new();
    for _ in 0..5 {
        engine.update(4.2);
        seen.push(engine.take_announcement().unwrap());
    }
    assert_eq!(seen[0], "Warm morning coffee. Sunlight kisses the cup; steam drifts in the air.");
    assert_eq!(seen[4], "Freshly made bed. Hands smoothing soft fabric, slow and gentle.");
    assert_eq!(engine.index(), 0);
}

// ============================================================================
// Emitter scenarios
// ============================================================================

#[test]
fn test_droplet_absent_just_after_its_lifetime() {
    let spec = EmitterSpec::droplets(ReelConfig::default().droplets);
    let mut emitter = Emitter::new(spec, StdRng::seed_from_u64(8));
    emitter.emit();
    emitter.update(8.01);
    assert!(emitter.particles().is_empty());
}

#[test]
fn test_every_particle_is_removed_within_its_lifetime() {
    let config = ReelConfig::default();
    let spec = EmitterSpec::fruit(config.fruit);
    let mut emitter = Emitter::new(spec, StdRng::seed_from_u64(21));
    emitter.start();
    // Uneven frame times
    for frame in 0..2000 {
        let dt = if frame % 7 == 0 { 0.05 } else { 1.0 / 60.0 };
        emitter.update(dt);
        assert!(emitter.particles().iter().all(|p| p.age < config.fruit.lifetime));
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_unmount_cancels_timers() {
    let mut engine = ReelEngine::new(Scenes::morning(), &ReelConfig::default(), 5);
    engine.mount();
    engine.update(5.0);
    assert_eq!(engine.index(), 1);
    assert!(!engine.particles(3).is_empty());

    engine.unmount();
    assert!(!engine.is_mounted());
    assert!(engine.particles(3).is_empty());

    engine.update(60.0);
    assert_eq!(engine.index(), 1);
    assert!(engine.particles(3).is_empty());
    assert!(engine.particles(4).is_empty());
}

#[test]
fn test_remount_resumes_autoplay_from_a_fresh_period() {
    let mut engine = ReelEngine::new(Scenes::morning(), &ReelConfig::default(), 5);
    engine.mount();
    engine.update(4.0);
    engine.unmount();
    engine.mount();
    engine.update(4.0);
    assert_eq!(engine.index(), 0);
    engine.update(0.3);
    assert_eq!(engine.index(), 1);
}

// ============================================================================
// Soundtrack
// ============================================================================

#[test]
fn test_soundtrack_follows_play_state() {
    let (mut engine, calls) = engine_with_track(false);
    engine.mount();
    engine.apply(Control::TogglePlay);
    engine.apply(Control::TogglePlay);
    engine.unmount();
    assert_eq!(
        *calls.borrow(),
        [AudioCall::Play, AudioCall::Pause, AudioCall::Play, AudioCall::Pause]
    );
}

#[test]
fn test_blocked_soundtrack_does_not_stop_the_reel() {
    let (mut engine, calls) = engine_with_track(true);
    engine.mount();
    assert_eq!(engine.state(), PlaybackState::Playing);
    engine.update(4.2);
    assert_eq!(engine.index(), 1);
    // One attempt on mount, never retried by frame updates
    assert_eq!(*calls.borrow(), [AudioCall::Play]);
}
