use super::*;

#[test]
fn defaults_describe_the_demo_scene() {
    let c = DemoConfig::default();
    assert_eq!((c.canvas.width, c.canvas.height), (1920, 1080));
    assert_eq!(c.background, [16, 153, 187, 255]);
    assert_eq!(c.water.tick_step, 0.2);
    assert_eq!(c.water.position, [400.0, 300.0]);
    assert_eq!(c.water.scale, 10.0);
    assert_eq!(c.water.params.iterations_raymarch, 12);
    assert_eq!(c.water.params.iterations_normal, 40);
    assert_eq!(c.mask.overlay_alpha, 0.75);
    assert_eq!(c.mask.label, "EXAMPLE MASK");
    assert_eq!(c.mask.font_size, 200.0);
    c.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let c = DemoConfig::from_json_str(
        r#"{
            "canvas": { "width": 64, "height": 32 },
            "water": { "drag_mult": 0.1, "scale": 2.0 },
            "mask": { "channel": "alpha", "cutouts": ["M0 0 H8 V8 Z"] }
        }"#,
    )
    .unwrap();
    assert_eq!(c.canvas, Canvas::new(64, 32).unwrap());
    assert_eq!(c.water.params.drag_mult, 0.1);
    assert_eq!(c.water.params.iterations_normal, 40);
    assert_eq!(c.water.scale, 2.0);
    assert_eq!(c.water.tick_step, 0.2);
    assert_eq!(c.mask.channel, MaskChannel::Alpha);
    assert_eq!(c.mask.label, "EXAMPLE MASK");
    c.validate().unwrap();
}

#[test]
fn json_output_parses_back() {
    let c = DemoConfig::default();
    let back = DemoConfig::from_json_str(&c.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = DemoConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, SeaglassError::Serde(_)));
}

#[test]
fn validate_rejects_bad_values() {
    let mut c = DemoConfig::default();
    c.water.params.iterations_raymarch = 0;
    assert!(c.validate().is_err());

    let mut c = DemoConfig::default();
    c.water.tick_step = -0.2;
    assert!(c.validate().is_err());

    let mut c = DemoConfig::default();
    c.mask.overlay_alpha = 1.25;
    assert!(c.validate().is_err());

    let mut c = DemoConfig::default();
    c.canvas.width = 0;
    assert!(c.validate().is_err());

    let mut c = DemoConfig::default();
    c.mask.cutouts.push("  ".to_string());
    assert!(c.validate().is_err());

    let mut c = DemoConfig::default();
    c.mask.label.clear();
    c.mask.font_size = 0.0;
    c.validate().unwrap();
}

#[test]
fn missing_config_file_reports_path() {
    let err = DemoConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
