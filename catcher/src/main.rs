use anyhow::{Context, Result};
use catcher::cli::Args;
use catcher::logging::init_logging;
use catcher::{
    AppConfig, FrameSource, ImageDirSource, InputPoll, LogRenderer, MotionGame,
    PngSequenceRenderer, Renderer, RunSummary, TickLimit,
};
use clap::Parser;
use game_core::{GameRng, Sprite};
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let sprite = Sprite::load(&config.sprite, config.game.sprite_size)
        .with_context(|| format!("cannot load sprite {}", config.sprite.display()))?;
    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let source = ImageDirSource::open(&args.frames)
        .with_context(|| format!("cannot open camera frames {}", args.frames.display()))?;
    let input = match args.max_ticks {
        Some(ticks) => TickLimit::new(ticks, config.quit_key),
        None => TickLimit::unlimited(),
    };

    let summary = match &args.output {
        Some(dir) => play(&config, sprite, source, PngSequenceRenderer::create(dir)?, input, rng)?,
        None => play(&config, sprite, source, LogRenderer::new(), input, rng)?,
    };

    info!("Final score: {}", summary.score);
    Ok(())
}

fn play<S: FrameSource, R: Renderer, I: InputPoll>(
    config: &AppConfig,
    sprite: Sprite,
    source: S,
    renderer: R,
    input: I,
    rng: GameRng,
) -> Result<RunSummary> {
    let mut game = MotionGame::new(config, sprite, source, renderer, input, rng)?;
    let summary = game.run().context("failed to present frame")?;
    Ok(summary)
}
