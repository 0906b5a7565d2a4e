use super::*;
use crate::foundation::core::Canvas;

const BG: [u8; 4] = [16, 153, 187, 255];
const OVERLAY_ON_BG: [u8; 4] = [195, 229, 238, 255];

fn small_config() -> DemoConfig {
    let mut c = DemoConfig {
        canvas: Canvas::new(48, 32).unwrap(),
        ..DemoConfig::default()
    };
    c.water.position = [40.0, 8.0];
    c.water.half_extent = 4.0;
    c.water.scale = 1.0;
    c.mask.cutouts = vec!["M0 0 H8 V32 H0 Z".to_string()];
    c
}

#[test]
fn overlay_is_cut_where_the_stencil_is_dark() {
    let config = small_config();
    let renderer = renderer_for(&config, false).unwrap();
    let scene = DemoScene::build(&config, &renderer, None).unwrap();
    let f = scene.render(&renderer).unwrap();

    assert_eq!(f.pixel(2, 20), Some(BG));
    assert_eq!(f.pixel(20, 20), Some(OVERLAY_ON_BG));
}

#[test]
fn water_is_drawn_above_the_overlay() {
    let config = small_config();
    let renderer = renderer_for(&config, false).unwrap();
    let scene = DemoScene::build(&config, &renderer, None).unwrap();
    let f = scene.render(&renderer).unwrap();

    let shader = WaterShader::new(config.water.params).unwrap();
    let expected = shader.shade_rgba8(glam::vec2(0.5625, 0.5625));
    assert_eq!(f.pixel(40, 8), Some(expected));
}

#[test]
fn ticks_accumulate_the_fixed_step() {
    let config = small_config();
    let renderer = renderer_for(&config, false).unwrap();
    let mut scene = DemoScene::build(&config, &renderer, None).unwrap();
    for _ in 0..5 {
        scene.tick();
    }
    assert_eq!(scene.ticks(), 5);
    assert!((scene.time() - 1.0).abs() < 1e-5);
    assert_eq!(scene.tick_step(), 0.2);
}

#[test]
fn frames_after_equal_ticks_are_identical() {
    let config = small_config();
    let renderer = renderer_for(&config, false).unwrap();
    let mut a = DemoScene::build(&config, &renderer, None).unwrap();
    let mut b = DemoScene::build(&config, &renderer, None).unwrap();
    let start = a.render(&renderer).unwrap();
    for _ in 0..3 {
        a.tick();
        b.tick();
    }

    let fa = a.render(&renderer).unwrap();
    assert_eq!(fa, b.render(&renderer).unwrap());
    assert_ne!(fa, start);
    // The overlay is static.
    assert_eq!(fa.pixel(20, 20), start.pixel(20, 20));
}

#[test]
fn invalid_config_fails_to_build() {
    let mut config = small_config();
    let renderer = renderer_for(&config, false).unwrap();
    config.mask.cutouts = vec!["M 0 0 X".to_string()];
    assert!(DemoScene::build(&config, &renderer, None).is_err());

    config.mask.cutouts.clear();
    config.water.params.water_depth = -1.0;
    assert!(DemoScene::build(&config, &renderer, None).is_err());
}

#[test]
fn unreadable_font_reports_path() {
    let err = load_font(Path::new("no/such/font.ttf")).unwrap_err();
    assert!(err.to_string().contains("no/such/font.ttf"));
}
