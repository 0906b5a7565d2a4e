use super::*;
use crate::scene::shapes::FillRect;

fn canvas() -> Canvas {
    Canvas::new(6, 4).unwrap()
}

#[test]
fn render_clears_to_the_background_first() {
    let r = Renderer::new(
        canvas(),
        RenderSettings {
            clear_rgba: Some([16, 153, 187, 255]),
            parallel: false,
        },
    )
    .unwrap();
    let f = r.render(&FillRect::sized(3.0, 4.0, [255, 255, 255, 255])).unwrap();

    assert_eq!((f.width, f.height), (6, 4));
    assert!(f.premultiplied);
    assert_eq!(f.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(4, 1), Some([16, 153, 187, 255]));
}

#[test]
fn generated_textures_start_transparent() {
    let r = Renderer::new(
        canvas(),
        RenderSettings {
            clear_rgba: Some([16, 153, 187, 255]),
            parallel: false,
        },
    )
    .unwrap();
    let tex = r
        .generate_texture(&FillRect::sized(3.0, 4.0, [0, 0, 0, 255]))
        .unwrap();

    assert_eq!(tex.canvas(), canvas());
    assert_eq!(tex.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(tex.pixel(4, 1), Some([0, 0, 0, 0]));
    assert_eq!(tex.pixel(6, 0), None);
}

#[test]
fn translucent_background_is_premultiplied() {
    let r = Renderer::new(
        canvas(),
        RenderSettings {
            clear_rgba: Some([255, 0, 0, 128]),
            parallel: false,
        },
    )
    .unwrap();
    let f = r.render(&FillRect::sized(0.0, 0.0, [0; 4])).unwrap();
    assert_eq!(f.pixel(0, 0), Some([128, 0, 0, 128]));
}

#[test]
fn empty_canvas_is_rejected() {
    let c = Canvas {
        width: 0,
        height: 4,
    };
    assert!(Renderer::new(c, RenderSettings::default()).is_err());
}
