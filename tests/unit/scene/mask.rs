use super::*;
use crate::{foundation::core::Canvas, render::renderer::RenderSettings};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn renderer() -> Renderer {
    Renderer::new(
        Canvas::new(8, 8).unwrap(),
        RenderSettings {
            clear_rgba: Some([16, 153, 187, 255]),
            parallel: false,
        },
    )
    .unwrap()
}

fn left_half_cutout(r: &Renderer) -> Texture {
    MaskTextureGenerator::new(r)
        .generate(MaskLayout {
            fill: WHITE,
            label: None,
            cutouts: vec![FillPath::from_svg("M0 0 H4 V8 H0 Z", BLACK).unwrap()],
        })
        .unwrap()
}

#[test]
fn generated_mask_is_canvas_sized_stencil() {
    let r = renderer();
    let tex = left_half_cutout(&r);
    assert_eq!(tex.canvas(), r.canvas());
    assert_eq!(tex.pixel(1, 3), Some(BLACK));
    assert_eq!(tex.pixel(6, 3), Some(WHITE));
}

#[test]
fn red_channel_mask_removes_content_under_black() {
    let r = renderer();
    let masked = Masked {
        content: Box::new(FillRect::sized(8.0, 8.0, WHITE)),
        mask: Box::new(Sprite::new(left_half_cutout(&r))),
        channel: MaskChannel::Red,
    };
    let f = r.render(&masked).unwrap();
    assert_eq!(f.pixel(1, 3), Some([16, 153, 187, 255]));
    assert_eq!(f.pixel(6, 3), Some(WHITE));
}

#[test]
fn alpha_channel_mask_keeps_opaque_black() {
    let r = renderer();
    let masked = Masked {
        content: Box::new(FillRect::sized(8.0, 8.0, WHITE)),
        mask: Box::new(Sprite::new(left_half_cutout(&r))),
        channel: MaskChannel::Alpha,
    };
    let f = r.render(&masked).unwrap();
    assert!(f.data.chunks_exact(4).all(|px| px == WHITE));
}

#[test]
fn mask_moves_with_its_world_transform() {
    let r = renderer();
    let masked = Masked {
        content: Box::new(FillRect::sized(8.0, 8.0, WHITE)),
        mask: Box::new(Sprite::new(left_half_cutout(&r))),
        channel: MaskChannel::Red,
    };
    let mut surface = r.new_surface().unwrap();
    masked
        .draw(&mut surface, Affine::translate((2.0, 0.0)), &r)
        .unwrap();
    let f = surface.to_frame();
    // Content starts at x = 2 and the cutout spans x in [2, 6).
    assert_eq!(f.pixel(1, 3), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(4, 3), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(7, 3), Some(WHITE));
}

#[test]
fn sprite_bounds_match_texture_size() {
    let r = renderer();
    let sprite = Sprite::new(left_half_cutout(&r));
    assert_eq!(sprite.local_bounds(), Some(r.canvas().rect()));
}
