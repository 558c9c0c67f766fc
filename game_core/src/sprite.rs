use std::io;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, ImageError, Luma, Rgb, RgbImage};

use crate::{Params, SpriteError};

/// Square sprite image with its opacity mask
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbImage,
    mask: GrayImage, // 255 where opaque
}

impl Sprite {
    /// Load an image file and fit it to `size` x `size`
    pub fn load(path: impl AsRef<Path>, size: u32) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|err| match err {
            ImageError::IoError(io) if io.kind() == io::ErrorKind::NotFound => {
                SpriteError::NotFound(path.to_path_buf())
            }
            source => SpriteError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(Self::from_image(&image.to_rgb8(), size))
    }

    /// Fit an in-memory image to `size` x `size`.
    ///
    /// Pixels whose grayscale value is above [`Params::SPRITE_OPAQUE_LEVEL`]
    /// are opaque; near-black pixels are treated as background.
    pub fn from_image(image: &RgbImage, size: u32) -> Self {
        let image = if image.dimensions() == (size, size) {
            image.clone()
        } else {
            imageops::resize(image, size, size, FilterType::Triangle)
        };

        let mut mask = imageops::grayscale(&image);
        for pixel in mask.pixels_mut() {
            pixel[0] = if pixel[0] > Params::SPRITE_OPAQUE_LEVEL { 255 } else { 0 };
        }

        Self { image, mask }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.mask.get_pixel(x, y)[0] != 0
    }

    /// Opaque pixels as (x, y, color), sprite-local coordinates
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb<u8>)> + '_ {
        self.mask
            .enumerate_pixels()
            .filter(|(_, _, Luma([m]))| *m != 0)
            .map(|(x, y, _)| (x, y, *self.image.get_pixel(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_pixels_are_transparent() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        image.put_pixel(1, 2, Rgb([200, 30, 30]));
        image.put_pixel(3, 3, Rgb([1, 1, 1])); // at the opacity level, still transparent

        let sprite = Sprite::from_image(&image, 4);

        assert!(sprite.is_opaque(1, 2));
        assert!(!sprite.is_opaque(3, 3));
        assert!(!sprite.is_opaque(0, 0));
        let opaque: Vec<_> = sprite.opaque_pixels().collect();
        assert_eq!(opaque, vec![(1, 2, Rgb([200, 30, 30]))]);
    }

    #[test]
    fn test_sprite_is_resized_to_square() {
        let image = RgbImage::from_pixel(30, 20, Rgb([255, 255, 255]));
        let sprite = Sprite::from_image(&image, 10);
        assert_eq!(sprite.size(), 10);
        assert_eq!(sprite.image().dimensions(), (10, 10));
        assert_eq!(sprite.mask().dimensions(), (10, 10));
        assert_eq!(sprite.opaque_pixels().count(), 100);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Sprite::load("definitely/not/here/logo.png", 50).unwrap_err();
        assert!(matches!(err, SpriteError::NotFound(_)));
        assert!(err.to_string().contains("logo.png"));
    }
}
