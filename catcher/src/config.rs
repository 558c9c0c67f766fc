use std::fs;
use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::Deserialize;
use vision::MotionConfig;

use crate::ConfigError;

/// Application tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct AppParams;

impl AppParams {
    // Camera
    pub const MIRROR: bool = true;
    pub const MAX_CAPTURE_FAILURES: u32 = 30;

    // Assets
    pub const SPRITE_PATH: &'static str = "logo.png";

    // Controls
    pub const QUIT_KEY: char = 'q';

    // Score text: baseline start, pixel height, color
    pub const HUD_X: u32 = 30;
    pub const HUD_Y: u32 = 50;
    pub const HUD_FONT_SIZE: f32 = 28.0;
    pub const HUD_COLOR: [u8; 3] = [0, 0, 255];
}

/// Everything needed to build a game, loadable from TOML.
///
/// ```toml
/// width = 640
/// height = 480
/// seed = 7
///
/// [motion]
/// scale = 2
/// history_limit = 5
///
/// [game]
/// sprite_size = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub mirror: bool,
    pub seed: Option<u64>,
    pub sprite: PathBuf,
    pub quit_key: char,
    pub max_capture_failures: u32,
    pub motion: MotionConfig,
    pub game: game_core::Config,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: game_core::Params::DISPLAY_WIDTH,
            height: game_core::Params::DISPLAY_HEIGHT,
            mirror: AppParams::MIRROR,
            seed: None,
            sprite: PathBuf::from(AppParams::SPRITE_PATH),
            quit_key: AppParams::QUIT_KEY,
            max_capture_failures: AppParams::MAX_CAPTURE_FAILURES,
            motion: MotionConfig::default(),
            game: game_core::Config::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn display(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.working_size(self.width, self.height)?;
        self.game.validate(self.display())?;
        Ok(())
    }
}
