use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::info;

use crate::audio::{self, Soundtrack};
use crate::config::ReelConfig;
use crate::constants::*;
use crate::controls::{Control, ControlBar};
use crate::emitter::{Emitter, EmitterSpec};
use crate::engine::Engine;
use crate::particle::Particle;
use crate::reel::panel::{Grain, draw_panel};
use crate::reel::track::Track;
use crate::scene::Scenes;
use crate::sequencer::Sequencer;
use crate::state::PlaybackState;

/// The morning reel: a track of scene panels sliding one at a time, with
/// autoplay, particle decorations, a soundtrack and on-screen controls.
pub struct ReelEngine<'a> {
    scenes: Scenes,
    sequencer: Sequencer,
    emitters: Vec<Option<Emitter<StdRng>>>, // one slot per scene
    track: Track,
    controls: ControlBar,
    grain: Grain,
    soundtrack: Option<Box<dyn Soundtrack + 'a>>,

    clock: f32,
    mounted: bool,
    announcement: Option<String>,
}

impl<'a> ReelEngine<'a> {
    pub fn new(scenes: Scenes, config: &ReelConfig, seed: u64) -> Self {
        let sequencer = Sequencer::new(&scenes, config.autoplay_period);
        let emitters = scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                let spec = EmitterSpec::for_decoration(scene.foreground?, config)?;
                let rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                Some(Emitter::new(spec, rng))
            })
            .collect();

        Self {
            scenes,
            sequencer,
            emitters,
            track: Track::new(config.track_transition),
            controls: ControlBar::new(),
            grain: Grain::new(),
            soundtrack: None,
            clock: 0.0,
            mounted: false,
            announcement: None,
        }
    }

    pub fn with_soundtrack(mut self, soundtrack: Box<dyn Soundtrack + 'a>) -> Self {
        self.soundtrack = Some(soundtrack);
        self
    }

    pub fn index(&self) -> usize {
        self.sequencer.index()
    }

    pub fn state(&self) -> PlaybackState {
        self.sequencer.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn track_position(&self) -> f32 {
        self.track.position()
    }

    /// Live particles of the scene at `index` (empty for scenes without an emitter).
    pub fn particles(&self, index: usize) -> &[Particle] {
        match self.emitters.get(index) {
            Some(Some(emitter)) => emitter.particles(),
            _ => &[],
        }
    }

    pub fn control_at(&self, point: Vector2) -> Option<Control> {
        self.controls.hit(point)
    }

    /// Description of the scene that just became current, once per change.
    pub fn take_announcement(&mut self) -> Option<String> {
        self.announcement.take()
    }

    fn on_index_changed(&mut self) {
        self.track.slide_to(self.sequencer.track_offset());
        self.announce();
    }

    fn announce(&mut self) {
        let scene = &self.scenes[self.sequencer.index()];
        let description = scene.description();
        info!(scene = scene.id, index = self.sequencer.index(), "{}", description);
        self.announcement = Some(description);
    }

    fn sync_soundtrack(&mut self) {
        let playing = self.sequencer.is_playing();
        if let Some(track) = self.soundtrack.as_deref_mut() {
            audio::sync(track, playing);
        }
    }
}

impl Engine for ReelEngine<'_> {
    fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.sequencer.start();
        for emitter in self.emitters.iter_mut().flatten() {
            emitter.start();
        }
        info!(scenes = self.scenes.len(), "reel mounted");
        self.sync_soundtrack();
        self.announce();
    }

    fn update(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        self.clock += dt;

        if self.sequencer.update(dt) {
            self.on_index_changed();
        }
        for emitter in self.emitters.iter_mut().flatten() {
            emitter.update(dt);
        }
        self.track.update(dt);

        if let Some(track) = self.soundtrack.as_deref_mut() {
            track.pump();
        }
    }

    fn apply(&mut self, control: Control) {
        if !self.mounted {
            return;
        }
        match control {
            Control::TogglePlay => {
                let state = self.sequencer.toggle_play();
                info!(?state, "playback toggled");
                self.sync_soundtrack();
            }
            Control::Prev => {
                self.sequencer.retreat();
                self.on_index_changed();
            }
            Control::Next => {
                self.sequencer.advance();
                self.on_index_changed();
            }
        }
    }

    fn render_frame(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        framebuffer: &mut RenderTexture2D,
    ) {
        let position = self.track.position();
        let playing = self.sequencer.is_playing();

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::WHITE);

            // Only the panels overlapping the screen: one when settled, two while sliding
            for (i, scene) in self.scenes.iter().enumerate() {
                let offset = i as f32 + position;
                if offset.abs() >= 1.0 {
                    continue;
                }
                let left = offset * RENDER_WIDTH as f32;
                draw_panel(&mut d, scene, self.particles(i), &self.grain, left, self.clock);
            }

            self.controls.draw(&mut d, playing);
        });
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.sequencer.stop();
        for emitter in self.emitters.iter_mut().flatten() {
            emitter.stop();
        }
        if let Some(track) = self.soundtrack.as_deref_mut() {
            track.pause();
        }
        info!("reel unmounted");
    }
}
