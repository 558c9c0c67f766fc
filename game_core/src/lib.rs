pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod sprite;
pub mod systems;
pub mod target;

pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use sprite::*;
pub use target::*;

use image::{GrayImage, RgbImage};
use systems::flash_rows;

/// Run one tick of the catch game against a motion mask.
///
/// Moves and scores the target, draws it into `frame` and flashes the frame
/// when the target was caught. Returns whether it was caught.
pub fn step(
    target: &mut FallingTarget,
    motion: &GrayImage,
    frame: &mut RgbImage,
    rng: &mut GameRng,
) -> bool {
    // 1. Fall, then miss/catch checks
    let caught = target.update_position(motion, rng);

    // 2. Composite sprite over the camera image
    target.update_frame(frame);

    // 3. Flash on catch
    if caught {
        flash_rows(frame);
    }

    caught
}
