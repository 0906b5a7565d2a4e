use super::*;

#[test]
fn mix_endpoints_and_midpoint() {
    assert_eq!(mix(2.0f32, 4.0, 0.0), 2.0);
    assert_eq!(mix(2.0f32, 4.0, 1.0), 4.0);
    assert_eq!(mix(2.0f32, 4.0, 0.5), 3.0);

    let v = mix(Vec3::ZERO, Vec3::ONE, 0.25);
    assert_eq!(v, Vec3::splat(0.25));
}

#[test]
fn reflect_flips_normal_component() {
    let r = reflect(vec3(1.0, -1.0, 0.0), Vec3::Y);
    assert_eq!(r, vec3(1.0, 1.0, 0.0));
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(0.0), 0);
    assert_eq!(unit_to_u8(1.0), 255);
    assert_eq!(unit_to_u8(7.0), 255);
}
