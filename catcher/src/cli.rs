use std::path::PathBuf;

use clap::Parser;

use crate::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "motion-catch")]
#[command(about = "Catch the falling sprite by moving in front of the camera")]
pub struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long, env = "MOTION_CATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of recorded camera frames, played in file-name order
    #[arg(short, long)]
    pub frames: PathBuf,

    /// Write composited frames here as PNGs instead of logging the score
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sprite image
    #[arg(long)]
    pub sprite: Option<PathBuf>,

    /// Display width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Display height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Downscale factor for motion detection
    #[arg(long)]
    pub scale: Option<u32>,

    /// Frames averaged into the background
    #[arg(long)]
    pub history: Option<usize>,

    /// Brightness difference that counts as motion
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Seed for sprite placement and speeds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep frames unmirrored
    #[arg(long)]
    pub no_mirror: bool,

    /// Stop after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlay command-line values onto a loaded config
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(sprite) = &self.sprite {
            config.sprite = sprite.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(scale) = self.scale {
            config.motion.scale = scale;
        }
        if let Some(history) = self.history {
            config.motion.history_limit = history;
        }
        if let Some(threshold) = self.threshold {
            config.motion.threshold = threshold;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_mirror {
            config.mirror = false;
        }
    }
}
