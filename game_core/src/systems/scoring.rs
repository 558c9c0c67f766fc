use log::debug;

use crate::systems::{reached_bottom, sprite_hits_motion};
use crate::{FallingTarget, GameRng};
use image::GrayImage;

/// Penalise a target that fell off the bottom and respawn it.
///
/// Returns whether the target was missed this tick.
pub fn check_miss(target: &mut FallingTarget, rng: &mut GameRng) -> bool {
    if !reached_bottom(target) {
        return false;
    }

    target.score -= 1;
    target.events.missed = true;
    let speeds = target.config.miss_speeds();
    target.respawn(speeds, rng);
    debug!("target missed, score {}", target.score);
    true
}

/// Reward a target overlapping motion and respawn it.
///
/// Returns whether the target was caught this tick.
pub fn check_catch(target: &mut FallingTarget, motion: &GrayImage, rng: &mut GameRng) -> bool {
    if !sprite_hits_motion(&target.sprite, target.pos, motion) {
        return false;
    }

    target.score += 1;
    target.events.caught = true;
    let speeds = target.config.catch_speeds();
    target.respawn(speeds, rng);
    debug!("target caught, score {}", target.score);
    true
}
