use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;
use vision::VisionError;

/// A frame could not be captured
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to list frames in {}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode frame {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// A frame could not be presented
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write frame {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to parse HUD font")]
    Font(#[from] ab_glyph::InvalidFont),
}

/// Configuration could not be loaded or describes an unplayable game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Motion(#[from] VisionError),

    #[error(transparent)]
    Game(#[from] game_core::ConfigError),
}
