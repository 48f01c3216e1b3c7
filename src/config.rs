use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::constants::*;
use crate::error::ReelError;

/// Command line of the reel player.
#[derive(Parser, Debug)]
#[command(name = "morning-reel", version, about = "Calm, airy, cinematic reel in pastel tones")]
pub struct Args {
    /// TOML file overriding the reel timings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Looping background music (mp3, ogg, wav, ...)
    #[arg(short, long)]
    pub audio: Option<PathBuf>,

    /// Seed for particle placement, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Spawn period and lifetime of one particle emitter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitterTiming {
    pub period: f32,
    pub lifetime: f32,
}

/// Timings of the reel. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    pub autoplay_period: f32,
    pub track_transition: f32,
    pub droplets: EmitterTiming,
    pub fruit: EmitterTiming,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            autoplay_period: AUTOPLAY_PERIOD,
            track_transition: TRACK_TRANSITION,
            droplets: EmitterTiming { period: DROPLET_SPAWN_PERIOD, lifetime: DROPLET_LIFETIME },
            fruit: EmitterTiming { period: FRUIT_SPAWN_PERIOD, lifetime: FRUIT_LIFETIME },
        }
    }
}

impl ReelConfig {
    pub fn load(path: &Path) -> Result<Self, ReelError> {
        let text = fs::read_to_string(path).map_err(|source| ReelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReelConfig = toml::from_str(&text).map_err(|source| ReelError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReelError> {
        let fields = [
            ("autoplay_period", self.autoplay_period),
            ("track_transition", self.track_transition),
            ("droplets.period", self.droplets.period),
            ("droplets.lifetime", self.droplets.lifetime),
            ("fruit.period", self.fruit.period),
            ("fruit.lifetime", self.fruit.lifetime),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ReelError::InvalidTiming { field, value });
            }
        }

        // Timer periods are floored at one frame
        let periods = [
            ("autoplay_period", self.autoplay_period),
            ("droplets.period", self.droplets.period),
            ("fruit.period", self.fruit.period),
        ];
        for (field, value) in periods {
            if value < MIN_PERIOD {
                return Err(ReelError::PeriodTooShort { field, value, min: MIN_PERIOD });
            }
        }
        Ok(())
    }
}
