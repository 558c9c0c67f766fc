use std::ops::Range;

use glam::UVec2;
use serde::Deserialize;

use crate::{ConfigError, Params};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sprite_size: u32,
    pub initial_speed: u32,
    pub miss_speed_min: u32,
    pub miss_speed_max: u32,
    pub catch_speed_min: u32,
    pub catch_speed_max: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprite_size: Params::SPRITE_SIZE,
            initial_speed: Params::INITIAL_SPEED,
            miss_speed_min: Params::MISS_SPEED_MIN,
            miss_speed_max: Params::MISS_SPEED_MAX,
            catch_speed_min: Params::CATCH_SPEED_MIN,
            catch_speed_max: Params::CATCH_SPEED_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speeds drawn after the target falls off the bottom
    pub fn miss_speeds(&self) -> Range<u32> {
        self.miss_speed_min..self.miss_speed_max
    }

    /// Speeds drawn after the target is caught
    pub fn catch_speeds(&self) -> Range<u32> {
        self.catch_speed_min..self.catch_speed_max
    }

    /// Exclusive upper bound for the target's X position
    pub fn max_x(&self, display: UVec2) -> u32 {
        display.x.saturating_sub(self.sprite_size)
    }

    /// Check that the sprite fits the display and every speed range can be sampled
    pub fn validate(&self, display: UVec2) -> Result<(), ConfigError> {
        if self.sprite_size == 0 {
            return Err(ConfigError::EmptySprite);
        }
        if self.sprite_size >= display.x || self.sprite_size >= display.y {
            return Err(ConfigError::SpriteTooLarge {
                size: self.sprite_size,
                width: display.x,
                height: display.y,
            });
        }
        if self.miss_speeds().is_empty() {
            return Err(ConfigError::EmptySpeedRange {
                name: "miss",
                min: self.miss_speed_min,
                max: self.miss_speed_max,
            });
        }
        if self.catch_speeds().is_empty() {
            return Err(ConfigError::EmptySpeedRange {
                name: "catch",
                min: self.catch_speed_min,
                max: self.catch_speed_max,
            });
        }
        Ok(())
    }
}
