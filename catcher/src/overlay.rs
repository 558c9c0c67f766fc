use ab_glyph::{point, Font, FontRef, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use crate::{AppParams, Hud, RenderError};

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Rasterizes the score text onto frames
#[derive(Debug, Clone)]
pub struct HudFont {
    font: FontRef<'static>,
    scale: PxScale,
    color: Rgb<u8>,
}

impl HudFont {
    /// The bundled sans-serif face at the default HUD size and color
    pub fn embedded() -> Result<Self, RenderError> {
        let font = FontRef::try_from_slice(DEJAVU_SANS)?;
        Ok(Self {
            font,
            scale: PxScale::from(AppParams::HUD_FONT_SIZE),
            color: Rgb(AppParams::HUD_COLOR),
        })
    }

    /// Draw `hud.text` with its baseline starting at `hud.origin`, in place.
    ///
    /// Coverage is blended over the frame; glyphs past the frame edge are clipped.
    pub fn draw(&self, frame: &mut RgbImage, hud: &Hud) {
        let scaled = self.font.as_scaled(self.scale);
        let (width, height) = frame.dimensions();
        let baseline = hud.origin.y as f32;
        let mut caret = hud.origin.x as f32;
        let mut previous = None;

        for ch in hud.text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, glyph_id);
            }
            previous = Some(glyph_id);

            let glyph = glyph_id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(glyph_id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue; // whitespace
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i64 + i64::from(x);
                let py = bounds.min.y as i64 + i64::from(y);
                if px < 0 || py < 0 || px >= i64::from(width) || py >= i64::from(height) {
                    return;
                }
                let pixel = frame.get_pixel_mut(px as u32, py as u32);
                *pixel = blend(*pixel, self.color, coverage);
            });
        }
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (f32::from(u) + (f32::from(o) - f32::from(u)) * alpha).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}
