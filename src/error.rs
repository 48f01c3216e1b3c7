use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up the reel.
///
/// Nothing that happens once the reel is running is an error: index arithmetic
/// cannot fail and soundtrack failures are swallowed.
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A timing value was zero, negative or not finite.
    #[error("invalid configuration: {field} must be a positive number of seconds, got {value}")]
    InvalidTiming { field: &'static str, value: f32 },

    /// A timer period shorter than one frame.
    #[error("invalid configuration: {field} must be at least {min} seconds, got {value}")]
    PeriodTooShort { field: &'static str, value: f32, min: f32 },

    #[error("a reel needs at least one scene")]
    NoScenes,

    #[error("soundtrack unavailable: {0}")]
    Audio(String),

    #[error("failed to create render texture: {0}")]
    Framebuffer(String),
}
