use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(canvas(3, 2)).unwrap();
    assert_eq!(s.data().len(), 3 * 2 * 4);
    assert!(s.data().iter().all(|&b| b == 0));
    assert_eq!(s.canvas(), canvas(3, 2));
}

#[test]
fn oversized_surface_is_rejected() {
    let c = Canvas {
        width: 70_000,
        height: 1,
    };
    assert!(Surface::new(c).is_err());
}

#[test]
fn paint_composites_over_existing_pixels() {
    let mut s = Surface::new(canvas(8, 8)).unwrap();
    s.clear(Rgba8Premul::from_straight([16, 153, 187, 255]));
    s.paint(|ctx| {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 0, 0, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 4.0, 8.0));
        Ok(())
    })
    .unwrap();

    let f = s.to_frame();
    assert_eq!(f.pixel(1, 3), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(6, 3), Some([16, 153, 187, 255]));
    assert_eq!(f.pixel(8, 0), None);
}

#[test]
fn paint_errors_propagate() {
    let mut s = Surface::new(canvas(2, 2)).unwrap();
    let err = s.paint(|_| Err(SeaglassError::render("boom"))).unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn straight_readback_unpremultiplies() {
    let f = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 64, 0, 128],
        premultiplied: true,
    };
    assert_eq!(f.to_straight_rgba8(), vec![255, 128, 0, 128]);
}
