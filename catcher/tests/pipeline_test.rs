use std::fs;

use catcher::*;
use game_core::{GameRng, Sprite};
use image::{Rgb, RgbImage};
use tempfile::tempdir;

#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("motion-catch.toml");
    fs::write(
        &path,
        r#"
        width = 320
        height = 240
        mirror = false
        sprite = "assets/ball.png"

        [motion]
        history_limit = 8

        [game]
        sprite_size = 24
        "#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!((config.width, config.height), (320, 240));
    assert!(!config.mirror);
    assert_eq!(config.sprite.to_str(), Some("assets/ball.png"));
    assert_eq!(config.motion.history_limit, 8);
    assert_eq!(config.motion.threshold, 15);
    assert_eq!(config.game.sprite_size, 24);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_errors() {
    let dir = tempdir().unwrap();

    let missing = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));

    let path = dir.path().join("broken.toml");
    fs::write(&path, "width = \"wide\"").unwrap();
    let broken = AppConfig::load(&path).unwrap_err();
    assert!(matches!(broken, ConfigError::Parse { .. }));
    assert!(broken.to_string().contains("broken.toml"));
}

#[test]
fn test_image_dir_source_plays_in_name_order() {
    let dir = tempdir().unwrap();
    RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]))
        .save(dir.path().join("frame_002.png"))
        .unwrap();
    RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]))
        .save(dir.path().join("frame_001.png"))
        .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a frame").unwrap();

    let mut source = ImageDirSource::open(dir.path()).unwrap();
    assert_eq!(source.remaining(), 2);

    let first = source.next_frame().unwrap().unwrap();
    let second = source.next_frame().unwrap().unwrap();
    assert_eq!(*first.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*second.get_pixel(0, 0), Rgb([255, 255, 255]));
    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn test_image_dir_source_skips_past_bad_frames() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.png"), b"garbage").unwrap();
    RgbImage::new(8, 8).save(dir.path().join("b.png")).unwrap();

    let mut source = ImageDirSource::open(dir.path()).unwrap();

    assert!(matches!(source.next_frame(), Err(CaptureError::Decode { .. })));
    assert!(source.next_frame().unwrap().is_some());
    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn test_recorded_session_to_png_sequence() {
    let frames = tempdir().unwrap();
    let output = tempdir().unwrap();
    for i in 0..6u8 {
        let level = if i < 3 { 0 } else { 200 };
        RgbImage::from_pixel(160, 120, Rgb([level; 3]))
            .save(frames.path().join(format!("cam_{i:03}.png")))
            .unwrap();
    }

    let mut config = AppConfig {
        width: 160,
        height: 120,
        seed: Some(1),
        ..AppConfig::default()
    };
    config.game.sprite_size = 16;
    let sprite = Sprite::from_image(&RgbImage::from_pixel(16, 16, Rgb([0, 255, 0])), 16);

    let mut game = MotionGame::new(
        &config,
        sprite,
        ImageDirSource::open(frames.path()).unwrap(),
        PngSequenceRenderer::create(output.path().join("out")).unwrap(),
        TickLimit::unlimited(),
        GameRng::new(1),
    )
    .unwrap();
    let summary = game.run().unwrap();

    assert_eq!(summary.end, RunEnd::SourceExhausted);
    assert_eq!(summary.stats.ticks, 6);
    assert!(summary.stats.catches >= 1, "scene change counts as motion");
    assert_eq!(game.renderer().written(), 6);

    let last = image::open(game.renderer().frame_path(5)).unwrap().to_rgb8();
    assert_eq!(last.dimensions(), (160, 120));
    assert!(!game.renderer().frame_path(6).exists());
}
