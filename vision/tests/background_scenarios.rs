use image::{Rgb, RgbImage};
use vision::*;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;

fn solid(value: u8) -> RgbImage {
    RgbImage::from_pixel(WIDTH, HEIGHT, Rgb([value, value, value]))
}

fn config(scale: u32, history_limit: usize) -> MotionConfig {
    MotionConfig {
        scale,
        history_limit,
        ..MotionConfig::default()
    }
}

#[test]
fn test_black_then_white_is_motion_until_background_catches_up() {
    let mut bg = BackgroundModel::new(WIDTH, HEIGHT, &config(2, 5)).unwrap();

    for _ in 0..5 {
        let mask = bg.apply(&solid(0));
        assert!(mask.pixels().all(|p| p[0] == 0));
    }
    assert!(bg.is_warm());

    let mask = bg.apply(&solid(255));
    assert_eq!(mask.dimensions(), (WIDTH, HEIGHT));
    assert!(
        mask.pixels().all(|p| p[0] == MOTION),
        "first white frame after black history is all motion"
    );

    for _ in 0..100 {
        bg.apply(&solid(255));
    }
    assert!(
        bg.background().pixels().all(|p| p[0] > 250.0),
        "background converges to white"
    );

    let mask = bg.apply(&solid(255));
    assert!(
        mask.pixels().all(|p| p[0] == 0),
        "steady white scene has no motion"
    );
}

#[test]
fn test_history_never_exceeds_limit() {
    let mut bg = BackgroundModel::new(WIDTH, HEIGHT, &config(4, 3)).unwrap();
    for i in 0..10u8 {
        bg.apply(&solid(i * 20));
        assert!(bg.history_len() <= 3);
    }
    assert_eq!(bg.history_len(), 3);
}

#[test]
fn test_mask_dimensions_follow_input_for_any_scale() {
    for scale in [1, 2, 3, 5, 8] {
        let mut bg = BackgroundModel::new(WIDTH, HEIGHT, &config(scale, 2)).unwrap();
        bg.apply(&solid(0));
        let mask = bg.apply(&solid(200));
        assert_eq!(mask.dimensions(), (WIDTH, HEIGHT), "scale {scale}");
        assert!(mask.pixels().all(|p| p[0] == 0 || p[0] == MOTION));
    }
}

#[test]
fn test_slow_drift_below_threshold_is_absorbed() {
    let mut bg = BackgroundModel::new(WIDTH, HEIGHT, &config(2, 5)).unwrap();
    for step in 0..40u8 {
        let mask = bg.apply(&solid(100 + step));
        assert!(
            mask.pixels().all(|p| p[0] == 0),
            "one level per frame stays under the threshold (frame {step})"
        );
    }
}
