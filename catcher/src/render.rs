use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, info};

use crate::{Hud, HudFont, RenderError, Renderer};

/// Writes every presented frame, score drawn in, as `frame_NNNNNN.png`
/// into a directory
#[derive(Debug)]
pub struct PngSequenceRenderer {
    dir: PathBuf,
    font: HudFont,
    written: u64,
    last_hud: Option<String>, // only log score changes
}

impl PngSequenceRenderer {
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let font = HudFont::embedded()?;
        info!("Writing frames to {}", dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            font,
            written: 0,
            last_hud: None,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Path of the `index`th frame
    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{index:06}.png"))
    }
}

impl Renderer for PngSequenceRenderer {
    fn present(&mut self, frame: &RgbImage, hud: &Hud) -> Result<(), RenderError> {
        let mut canvas = frame.clone();
        self.font.draw(&mut canvas, hud);

        let path = self.frame_path(self.written);
        canvas
            .save(&path)
            .map_err(|source| RenderError::Write { path, source })?;
        self.written += 1;

        if self.last_hud.as_deref() != Some(hud.text.as_str()) {
            debug!("{} (frame {})", hud.text, self.written);
            self.last_hud = Some(hud.text.clone());
        }
        Ok(())
    }
}

/// Headless display that logs the score whenever it changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_hud: Option<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, _frame: &RgbImage, hud: &Hud) -> Result<(), RenderError> {
        self.frames += 1;
        if self.last_hud.as_deref() != Some(hud.text.as_str()) {
            info!("{} (frame {})", hud.text, self.frames);
            self.last_hud = Some(hud.text.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_png_frames_carry_score_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = PngSequenceRenderer::create(dir.path()).unwrap();
        let frame = RgbImage::new(160, 120);

        renderer.present(&frame, &Hud::score(7)).unwrap();

        let saved = image::open(renderer.frame_path(0)).unwrap().to_rgb8();
        let near_origin = (20..55)
            .flat_map(|y| (30..160).map(move |x| (x, y)))
            .filter(|&(x, y)| saved.get_pixel(x, y)[2] > 0)
            .count();
        assert!(near_origin > 0, "score text drawn near (30, 50)");
        assert_eq!(*saved.get_pixel(100, 100), Rgb([0, 0, 0]));
        // The caller's frame is left untouched
        assert!(frame.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new();
        let frame = RgbImage::new(4, 4);
        renderer.present(&frame, &Hud::score(0)).unwrap();
        renderer.present(&frame, &Hud::score(0)).unwrap();
        renderer.present(&frame, &Hud::score(1)).unwrap();
        assert_eq!(renderer.frames(), 3);
        assert_eq!(renderer.last_hud.as_deref(), Some("Score: 1"));
    }
}
