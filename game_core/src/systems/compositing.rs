use glam::UVec2;
use image::{Rgb, RgbImage};

use crate::{Params, Sprite};

/// Overwrite `frame` with the sprite's opaque pixels at `pos`.
///
/// Equivalent to zeroing the masked region and adding the sprite, since the
/// two regions coincide. Pixels falling outside the frame are dropped.
pub fn draw_sprite(sprite: &Sprite, pos: UVec2, frame: &mut RgbImage) {
    let (width, height) = frame.dimensions();
    for (sx, sy, color) in sprite.opaque_pixels() {
        let (x, y) = (pos.x + sx, pos.y + sy);
        if x < width && y < height {
            frame.put_pixel(x, y, color);
        }
    }
}

/// Catch flash: paint every other row white, starting at row 0
pub fn flash_rows(frame: &mut RgbImage) {
    let white = Rgb([255, 255, 255]);
    let width = frame.width();
    for y in (0..frame.height()).step_by(Params::FLASH_ROW_STRIDE) {
        for x in 0..width {
            frame.put_pixel(x, y, white);
        }
    }
}
