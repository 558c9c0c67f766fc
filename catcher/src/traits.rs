use glam::UVec2;
use image::RgbImage;

use crate::{AppParams, CaptureError, RenderError};

/// Score text drawn over a presented frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub text: String,
    pub origin: UVec2, // left end of the text baseline, display pixels
}

impl Hud {
    pub fn score(score: i32) -> Self {
        Self {
            text: format!("Score: {score}"),
            origin: UVec2::new(AppParams::HUD_X, AppParams::HUD_Y),
        }
    }
}

/// Abstraction over camera frame acquisition.
/// Implementations: ImageDirSource (recorded frames), scripted sources (testing).
pub trait FrameSource {
    /// Next full-resolution frame; `Ok(None)` once the stream has ended.
    /// An `Err` only costs the current tick.
    fn next_frame(&mut self) -> Result<Option<RgbImage>, CaptureError>;
}

/// Abstraction over the display.
/// Implementations: PngSequenceRenderer, LogRenderer, recording renderers (testing).
pub trait Renderer {
    fn present(&mut self, frame: &RgbImage, hud: &Hud) -> Result<(), RenderError>;
}

/// Abstraction over keyboard polling.
/// Implementations: TickLimit.
pub trait InputPoll {
    /// Key pressed since the last poll, if any
    fn poll_key(&mut self) -> Option<char>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_score_text() {
        let hud = Hud::score(-3);
        assert_eq!(hud.text, "Score: -3");
        assert_eq!(hud.origin, UVec2::new(30, 50));
    }
}
