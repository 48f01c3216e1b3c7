use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use raylib::prelude::*;
use tracing::{debug, info, warn};

use morning_reel::audio::MusicTrack;
use morning_reel::config::{Args, ReelConfig};
use morning_reel::constants::*;
use morning_reel::controls::ControlBar;
use morning_reel::engine::Engine;
use morning_reel::error::ReelError;
use morning_reel::reel::ReelEngine;
use morning_reel::scene::Scenes;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => ReelConfig::load(path).context("loading reel configuration")?,
        None => ReelConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, ?config, "starting reel");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| ReelError::Framebuffer(format!("{:?}", e)))?;

    // The audio device must outlive the music stream borrowed from it
    let audio_device = match &args.audio {
        Some(_) => match RaylibAudio::init_audio_device() {
            Ok(device) => Some(device),
            Err(e) => {
                warn!("audio device unavailable, playing silently: {:?}", e);
                None
            }
        },
        None => None,
    };

    let mut engine = ReelEngine::new(Scenes::morning(), &config, seed);
    if let (Some(device), Some(path)) = (&audio_device, &args.audio) {
        match MusicTrack::load(device, path) {
            Ok(track) => engine = engine.with_soundtrack(Box::new(track)),
            Err(e) => debug!("continuing without soundtrack: {}", e),
        }
    }

    engine.mount();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let point = ControlBar::to_render_space(mouse, screen_width, screen_height);
            if let Some(control) = engine.control_at(point) {
                engine.apply(control);
            }
        }

        engine.update(dt);

        if let Some(description) = engine.take_announcement() {
            rl.set_window_title(&thread, &description);
        }

        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Render textures are stored upside down; flip while scaling to the window
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, screen_width, screen_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    engine.unmount();
    Ok(())
}
