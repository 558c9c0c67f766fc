use std::path::PathBuf;

use thiserror::Error;

/// Sprite asset could not be loaded
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("sprite image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode sprite image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Game configuration that cannot produce a playable target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sprite size {size} must be smaller than the {width}x{height} display")]
    SpriteTooLarge { size: u32, width: u32, height: u32 },

    #[error("sprite size must be at least 1")]
    EmptySprite,

    #[error("{name} speed range {min}..{max} is empty")]
    EmptySpeedRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[error("sprite is {actual}px but the configuration expects {expected}px")]
    SpriteSizeMismatch { expected: u32, actual: u32 },
}
