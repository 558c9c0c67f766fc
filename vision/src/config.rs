use serde::Deserialize;

use crate::VisionError;

/// Background model tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct MotionParams;

impl MotionParams {
    // Working resolution
    pub const SCALE: u32 = 2;

    // Rolling history
    pub const HISTORY_LIMIT: usize = 5;

    // Difference above this level counts as motion
    pub const THRESHOLD: u8 = 15;
}

/// Background model configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub scale: u32,
    pub history_limit: usize,
    pub threshold: u8,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scale: MotionParams::SCALE,
            history_limit: MotionParams::HISTORY_LIMIT,
            threshold: MotionParams::THRESHOLD,
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), VisionError> {
        if self.scale == 0 {
            return Err(VisionError::ZeroScale);
        }
        if self.history_limit == 0 {
            return Err(VisionError::ZeroHistory);
        }
        Ok(())
    }

    /// Working resolution for a full-resolution frame size
    pub fn working_size(
        &self,
        full_width: u32,
        full_height: u32,
    ) -> Result<(u32, u32), VisionError> {
        self.validate()?;
        let (width, height) = (full_width / self.scale, full_height / self.scale);
        if width == 0 || height == 0 {
            return Err(VisionError::FrameTooSmall {
                width: full_width,
                height: full_height,
                scale: self.scale,
            });
        }
        Ok((width, height))
    }
}
