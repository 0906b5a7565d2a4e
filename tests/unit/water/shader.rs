use super::*;

#[test]
fn advance_accumulates_fixed_steps() {
    let mut s = WaterShader::new(WaterParams::default()).unwrap();
    assert_eq!(s.uniforms().i_time, 0.0);
    for _ in 0..5 {
        s.tick();
    }
    assert!((s.uniforms().i_time - 1.0).abs() < 1e-5);

    s.advance(0.5);
    assert!((s.uniforms().i_time - 1.5).abs() < 1e-5);

    s.set_time(0.0);
    assert_eq!(s.uniforms(), WaterUniforms::default());
}

#[test]
fn uniforms_use_shader_names() {
    let json = serde_json::to_string(&WaterUniforms { i_time: 0.5 }).unwrap();
    assert_eq!(json, r#"{"iTime":0.5}"#);
}

#[test]
fn invalid_configuration_is_rejected() {
    let bad_depth = WaterParams {
        water_depth: 0.0,
        ..WaterParams::default()
    };
    assert!(WaterShader::new(bad_depth).is_err());

    let bad_iterations = WaterParams {
        iterations_normal: 0,
        ..WaterParams::default()
    };
    assert!(WaterShader::new(bad_iterations).is_err());

    let s = WaterShader::new(WaterParams::default()).unwrap();
    assert!(s.clone().with_tick_step(0.0).is_err());
    assert!(s.clone().with_tick_step(f32::NAN).is_err());
    assert_eq!(s.with_tick_step(0.5).unwrap().tick_step(), 0.5);
}

#[test]
fn parallel_and_sequential_textures_match() {
    let mut s = WaterShader::new(WaterParams::default()).unwrap();
    s.advance(0.6);
    let seq = s.render_rgba8(24, 12, false).unwrap();
    let par = s.render_rgba8(24, 12, true).unwrap();
    assert_eq!(seq.len(), 24 * 12 * 4);
    assert_eq!(seq, par);
    assert!(seq.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn texture_matches_per_pixel_shading() {
    let s = WaterShader::new(WaterParams::default()).unwrap();
    let tex = s.render_rgba8(4, 4, false).unwrap();
    let idx = (3 * 4 + 1) * 4;
    assert_eq!(
        &tex[idx..idx + 4],
        &s.shade_rgba8(vec2(1.5 / 4.0, 3.5 / 4.0))
    );
}

#[test]
fn empty_texture_is_rejected() {
    let s = WaterShader::new(WaterParams::default()).unwrap();
    assert!(s.render_rgba8(0, 4, false).is_err());
}
