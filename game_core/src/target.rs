use std::ops::Range;

use glam::UVec2;
use image::{GrayImage, RgbImage};
use rand::Rng;

use crate::systems::{check_catch, check_miss, draw_sprite, fall};
use crate::{Config, ConfigError, Events, GameRng, Sprite};

/// The falling sprite the player tries to catch
#[derive(Debug, Clone)]
pub struct FallingTarget {
    pub(crate) sprite: Sprite,
    pub(crate) config: Config,
    pub(crate) display: UVec2, // full-resolution display size
    pub(crate) pos: UVec2,     // top-left corner
    pub(crate) speed: u32,     // pixels per tick
    pub(crate) score: i32,
    pub(crate) events: Events,
}

impl FallingTarget {
    /// Place a new target at the top of the display with a random column
    pub fn new(
        sprite: Sprite,
        display: UVec2,
        config: Config,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate(display)?;
        if sprite.size() != config.sprite_size {
            return Err(ConfigError::SpriteSizeMismatch {
                expected: config.sprite_size,
                actual: sprite.size(),
            });
        }

        let x = rng.0.gen_range(0..config.max_x(display));
        Ok(Self {
            sprite,
            speed: config.initial_speed,
            config,
            display,
            pos: UVec2::new(x, 0),
            score: 0,
            events: Events::new(),
        })
    }

    /// Advance one tick against a motion mask.
    ///
    /// Falls by `speed`; a target reaching the bottom costs a point and
    /// respawns, then the (possibly new) position is tested against the mask.
    /// Both can happen in the same tick. Returns whether the target was caught.
    pub fn update_position(&mut self, motion: &GrayImage, rng: &mut GameRng) -> bool {
        self.events.clear();
        fall(self);
        check_miss(self, rng);
        check_catch(self, motion, rng)
    }

    /// Draw the sprite into `frame` at the current position, in place
    pub fn update_frame(&self, frame: &mut RgbImage) {
        draw_sprite(&self.sprite, self.pos, frame);
    }

    /// Back to the top with a new speed drawn from `speeds`, then a new column
    pub(crate) fn respawn(&mut self, speeds: Range<u32>, rng: &mut GameRng) {
        self.pos.y = 0;
        self.speed = rng.0.gen_range(speeds);
        self.pos.x = rng.0.gen_range(0..self.config.max_x(self.display));
    }

    pub fn position(&self) -> UVec2 {
        self.pos
    }

    pub fn x(&self) -> u32 {
        self.pos.x
    }

    pub fn y(&self) -> u32 {
        self.pos.y
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn size(&self) -> u32 {
        self.sprite.size()
    }

    pub fn display(&self) -> UVec2 {
        self.display
    }

    /// What happened during the last `update_position`
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
