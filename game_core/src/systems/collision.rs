use glam::UVec2;
use image::GrayImage;

use crate::Sprite;

/// Check whether any motion pixel lies under an opaque sprite pixel.
///
/// `pos` is the sprite's top-left corner in mask coordinates. Parts of the
/// footprint outside the mask never collide.
pub fn sprite_hits_motion(sprite: &Sprite, pos: UVec2, motion: &GrayImage) -> bool {
    let (width, height) = motion.dimensions();
    sprite.opaque_pixels().any(|(sx, sy, _)| {
        let (x, y) = (pos.x + sx, pos.y + sy);
        x < width && y < height && motion.get_pixel(x, y)[0] != 0
    })
}
