//! A looping, autoplaying reel of calm morning scenes rendered with raylib.

pub mod audio;
pub mod config;
pub mod constants;
pub mod controls;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod particle;
pub mod reel;
pub mod scene;
pub mod sequencer;
pub mod state;
pub mod timer;

pub use error::ReelError;
