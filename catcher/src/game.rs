use game_core::{FallingTarget, GameRng, Sprite};
use glam::UVec2;
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{info, warn};
use vision::BackgroundModel;

use crate::{AppConfig, ConfigError, FrameSource, Hud, InputPoll, RenderError, Renderer};

/// Why the game loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// Quit key pressed
    QuitKey,
    /// Frame source has no more frames
    SourceExhausted,
    /// Too many consecutive capture failures
    CaptureFailed,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop(RunEnd),
}

/// Counters over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,   // frames played
    pub skipped: u64, // ticks lost to capture failures
    pub catches: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: RunStats,
    pub score: i32,
    pub end: RunEnd,
}

/// One webcam catch game: capture, detect motion, play, present
pub struct MotionGame<S, R, I> {
    background: BackgroundModel,
    target: FallingTarget,
    rng: GameRng,
    source: S,
    renderer: R,
    input: I,
    display: UVec2,
    mirror: bool,
    quit_key: char,
    max_capture_failures: u32,
    capture_failures: u32, // consecutive
    stats: RunStats,
}

impl<S: FrameSource, R: Renderer, I: InputPoll> MotionGame<S, R, I> {
    pub fn new(
        config: &AppConfig,
        sprite: Sprite,
        source: S,
        renderer: R,
        input: I,
        mut rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let display = config.display();
        let background = BackgroundModel::new(display.x, display.y, &config.motion)?;
        let target = FallingTarget::new(sprite, display, config.game.clone(), &mut rng)?;

        let (work_w, work_h) = background.working_size();
        info!(
            "Game ready: display {}x{}, motion at {}x{}, history {}",
            display.x,
            display.y,
            work_w,
            work_h,
            background.history_limit()
        );

        Ok(Self {
            background,
            target,
            rng,
            source,
            renderer,
            input,
            display,
            mirror: config.mirror,
            quit_key: config.quit_key,
            max_capture_failures: config.max_capture_failures,
            capture_failures: 0,
            stats: RunStats::default(),
        })
    }

    /// Run one iteration of the main loop
    pub fn tick(&mut self) -> Result<Tick, RenderError> {
        // 1. Capture; a failed capture only skips this tick
        match self.source.next_frame() {
            Ok(Some(frame)) => {
                self.capture_failures = 0;
                self.play(frame)?;
            }
            Ok(None) => return Ok(Tick::Stop(RunEnd::SourceExhausted)),
            Err(err) => {
                self.capture_failures += 1;
                self.stats.skipped += 1;
                warn!(
                    "Skipping tick, capture failed ({}/{}): {err}",
                    self.capture_failures, self.max_capture_failures
                );
                if self.capture_failures >= self.max_capture_failures {
                    return Ok(Tick::Stop(RunEnd::CaptureFailed));
                }
            }
        }

        // 2. Quit key
        if self.input.poll_key() == Some(self.quit_key) {
            return Ok(Tick::Stop(RunEnd::QuitKey));
        }
        Ok(Tick::Continue)
    }

    /// Tick until the player quits or frames run out
    pub fn run(&mut self) -> Result<RunSummary, RenderError> {
        loop {
            if let Tick::Stop(end) = self.tick()? {
                let summary = RunSummary {
                    stats: self.stats,
                    score: self.target.score(),
                    end,
                };
                info!(
                    "Run ended ({:?}): score {}, {} catches, {} misses over {} ticks",
                    end, summary.score, self.stats.catches, self.stats.misses, self.stats.ticks
                );
                return Ok(summary);
            }
        }
    }

    fn play(&mut self, frame: RgbImage) -> Result<(), RenderError> {
        let mut frame = self.prepare(frame);
        let motion = self.background.apply(&frame);
        let caught = game_core::step(&mut self.target, &motion, &mut frame, &mut self.rng);

        self.stats.ticks += 1;
        if self.target.events().missed {
            self.stats.misses += 1;
        }
        if caught {
            self.stats.catches += 1;
        }

        self.renderer
            .present(&frame, &Hud::score(self.target.score()))
    }

    /// Fit a captured frame to the display and mirror it
    fn prepare(&self, frame: RgbImage) -> RgbImage {
        let mut frame = if frame.dimensions() == (self.display.x, self.display.y) {
            frame
        } else {
            imageops::resize(&frame, self.display.x, self.display.y, FilterType::Triangle)
        };
        if self.mirror {
            imageops::flip_horizontal_in_place(&mut frame);
        }
        frame
    }

    pub fn target(&self) -> &FallingTarget {
        &self.target
    }

    pub fn background(&self) -> &BackgroundModel {
        &self.background
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
