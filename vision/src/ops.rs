//! Image operations used by the background model
//!
//! Thin wrappers over the `image` crate plus the few kernels it does not
//! provide (fixed 5x5 Gaussian, absolute difference, binary threshold).

use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, RgbImage};

/// Single-channel `f32` grid used for the running background
pub type FloatImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Mask value for pixels classified as motion
pub const MOTION: u8 = 255;

/// 5-tap binomial kernel, sum 16
const KERNEL_5: [u32; 5] = [1, 4, 6, 4, 1];

/// Resize a color frame down to the working resolution
pub fn downscale(frame: &RgbImage, width: u32, height: u32) -> RgbImage {
    if frame.dimensions() == (width, height) {
        return frame.clone();
    }
    imageops::resize(frame, width, height, FilterType::Triangle)
}

/// Convert to single-channel intensity
pub fn to_gray(frame: &RgbImage) -> GrayImage {
    imageops::grayscale(frame)
}

/// Smooth with a 5x5 Gaussian whose sigma is derived from the kernel size.
///
/// Applied as two separable passes with reflect-101 borders; the result is
/// rounded half up.
pub fn gaussian_blur_5x5(gray: &GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray.clone();
    }

    // Horizontal pass keeps the x16 scale to avoid double rounding
    let mut horizontal = vec![0u32; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let acc: u32 = KERNEL_5
                .iter()
                .enumerate()
                .map(|(k, weight)| {
                    let sx = reflect_101(i64::from(x) + k as i64 - 2, width);
                    weight * u32::from(gray.get_pixel(sx, y)[0])
                })
                .sum();
            horizontal[(y * width + x) as usize] = acc;
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        let acc: u32 = KERNEL_5
            .iter()
            .enumerate()
            .map(|(k, weight)| {
                let sy = reflect_101(i64::from(y) + k as i64 - 2, height);
                weight * horizontal[(sy * width + x) as usize]
            })
            .sum();
        Luma([((acc + 128) / 256) as u8])
    })
}

/// Per-pixel absolute difference. Both grids must share dimensions.
pub fn abs_diff(a: &GrayImage, b: &GrayImage) -> GrayImage {
    GrayImage::from_fn(a.width(), a.height(), |x, y| {
        Luma([a.get_pixel(x, y)[0].abs_diff(b.get_pixel(x, y)[0])])
    })
}

/// Binary threshold: strictly above `level` becomes [`MOTION`], everything else 0
pub fn threshold_binary(gray: &GrayImage, level: u8) -> GrayImage {
    let mut mask = gray.clone();
    for pixel in mask.pixels_mut() {
        pixel[0] = if pixel[0] > level { MOTION } else { 0 };
    }
    mask
}

/// Scale a mask up with nearest-neighbour sampling so it stays binary
pub fn upscale_nearest(mask: &GrayImage, width: u32, height: u32) -> GrayImage {
    if mask.dimensions() == (width, height) {
        return mask.clone();
    }
    imageops::resize(mask, width, height, FilterType::Nearest)
}

/// Round a float grid to 8-bit intensities, saturating at both ends.
///
/// Halves round away from zero instead of truncating, so a background of
/// 115.5 compares as 116: a frame at 131 differs by 15, not 16, and stays
/// below the default threshold.
pub fn round_to_u8(grid: &FloatImage) -> GrayImage {
    GrayImage::from_fn(grid.width(), grid.height(), |x, y| {
        Luma([grid.get_pixel(x, y)[0].round().clamp(0.0, 255.0) as u8])
    })
}

fn reflect_101(i: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let i = i.rem_euclid(period);
    (if i >= len { period - i } else { i }) as u32
}
