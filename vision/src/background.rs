use std::collections::VecDeque;

use image::{GrayImage, RgbImage};
use log::debug;

use crate::ops::{self, FloatImage};
use crate::{MotionConfig, VisionError};

/// Rolling-average background estimator.
///
/// Frames are reduced to the working resolution, converted to grayscale and
/// blurred before entering the history. `background` is always the mean of
/// the history: it is summed from scratch while the history fills up, then
/// slid one frame at a time so each update costs one pass over the pixels.
#[derive(Debug, Clone)]
pub struct BackgroundModel {
    scale: u32,
    width: u32,
    height: u32,
    history_limit: usize,
    threshold: u8,
    history: VecDeque<GrayImage>, // oldest first
    background: FloatImage,
}

impl BackgroundModel {
    /// Create a model for frames of `full_width` x `full_height`
    pub fn new(
        full_width: u32,
        full_height: u32,
        config: &MotionConfig,
    ) -> Result<Self, VisionError> {
        let (width, height) = config.working_size(full_width, full_height)?;
        Ok(Self {
            scale: config.scale,
            width,
            height,
            history_limit: config.history_limit,
            threshold: config.threshold,
            history: VecDeque::with_capacity(config.history_limit),
            background: FloatImage::new(width, height),
        })
    }

    /// Consume one full-resolution frame and return its motion mask.
    ///
    /// The mask has the same dimensions as `frame`; motion pixels are
    /// [`ops::MOTION`], everything else is 0.
    pub fn apply(&mut self, frame: &RgbImage) -> GrayImage {
        let small = ops::downscale(frame, self.width, self.height);
        let gray = ops::gaussian_blur_5x5(&ops::to_gray(&small));

        self.update_frame(gray.clone());

        let diff = ops::abs_diff(&self.background_u8(), &gray);
        let mask = ops::threshold_binary(&diff, self.threshold);
        ops::upscale_nearest(&mask, frame.width(), frame.height())
    }

    /// Push a working-resolution grayscale frame into the history and
    /// refresh the background.
    pub fn update_frame(&mut self, frame: GrayImage) -> &FloatImage {
        if self.history.len() < self.history_limit {
            self.history.push_back(frame);
            self.recompute_background();
            if self.is_warm() {
                debug!("background warm after {} frames", self.history_limit);
            }
        } else if let Some(oldest) = self.history.pop_front() {
            self.slide_background(&oldest, &frame);
            self.history.push_back(frame);
        }
        &self.background
    }

    /// Exact mean of the current history
    fn recompute_background(&mut self) {
        let mut sum = FloatImage::new(self.width, self.height);
        for frame in &self.history {
            for (acc, &value) in sum.iter_mut().zip(frame.as_raw()) {
                *acc += f32::from(value);
            }
        }

        let count = self.history.len() as f32;
        for acc in sum.iter_mut() {
            *acc /= count;
        }
        self.background = sum;
    }

    /// background - oldest/limit + newest/limit; drift is not corrected
    fn slide_background(&mut self, oldest: &GrayImage, newest: &GrayImage) {
        let limit = self.history_limit as f32;
        let pairs = oldest.as_raw().iter().zip(newest.as_raw());
        for (bg, (&old, &new)) in self.background.iter_mut().zip(pairs) {
            *bg -= f32::from(old) / limit;
            *bg += f32::from(new) / limit;
        }
    }

    pub fn background(&self) -> &FloatImage {
        &self.background
    }

    /// Background rounded to 8-bit intensities
    pub fn background_u8(&self) -> GrayImage {
        ops::round_to_u8(&self.background)
    }

    /// Whether the history has filled up and updates are incremental
    pub fn is_warm(&self) -> bool {
        self.history.len() == self.history_limit
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Working resolution (full resolution divided by scale)
    pub fn working_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
