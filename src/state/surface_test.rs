use super::*;

const RED: Rgba = Rgba::opaque(255, 0, 0);

fn outline(width: u32, height: u32) -> TemplateImage {
    // Transparent everywhere except an opaque black first row.
    let mut px = vec![0u8; (width * height * 4) as usize];
    for x in 0..width as usize {
        px[x * 4 + 3] = 255;
    }
    TemplateImage::new(width, height, px).unwrap()
}

#[test]
fn zero_sized_surface_is_rejected() {
    assert!(matches!(Surface::new(0, 10), Err(CanvasError::EmptyTemplate { .. })));
}

#[test]
fn template_buffer_length_is_checked() {
    let err = TemplateImage::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, CanvasError::PixelBufferSize { expected: 16, actual: 15, .. }));
}

#[test]
fn paint_template_leaves_no_transparent_holes() {
    let mut s = Surface::new(4, 3).unwrap();
    s.paint_template(&outline(4, 3)).unwrap();
    assert_eq!(s.pixel(0, 0), Some(Rgba::opaque(0, 0, 0)));
    for y in 1..3 {
        for x in 0..4 {
            assert_eq!(s.pixel(x, y), Some(Rgba::WHITE));
        }
    }
}

#[test]
fn composite_rejects_mismatched_size() {
    let mut s = Surface::new(4, 4).unwrap();
    assert!(s.composite(&outline(2, 2)).is_err());
}

#[test]
fn half_transparent_template_blends_over_white() {
    let mut s = Surface::new(1, 1).unwrap();
    let t = TemplateImage::new(1, 1, vec![0, 0, 0, 128]).unwrap();
    s.paint_template(&t).unwrap();
    let p = s.pixel(0, 0).unwrap();
    assert_eq!(p.a, 255);
    assert!((126..=128).contains(&p.r), "got {p:?}");
}

#[test]
fn stamp_paints_center_pixel_and_reports_bounds() {
    let mut s = Surface::new(100, 100).unwrap();
    s.fill(Rgba::WHITE);
    let dirty = s.stamp_circle(Point::new(50.0, 50.0), 10.0, RED).unwrap();
    assert_eq!(s.pixel(50, 50), Some(RED));
    assert_eq!(s.pixel(40, 50), Some(RED));
    assert_eq!(s.pixel(38, 50), Some(Rgba::WHITE));
    // Corner of the bounding square lies outside the disc.
    assert_eq!(s.pixel(40, 40), Some(Rgba::WHITE));
    assert_eq!(dirty, DirtyRect { x: 40, y: 40, width: 20, height: 20 });
}

#[test]
fn stamp_is_clipped_at_edges() {
    let mut s = Surface::new(10, 10).unwrap();
    let dirty = s.stamp_circle(Point::new(0.0, 0.0), 3.0, RED).unwrap();
    assert_eq!((dirty.x, dirty.y), (0, 0));
    assert!(dirty.width <= 3 && dirty.height <= 3);
    assert_eq!(s.pixel(0, 0), Some(RED));
}

#[test]
fn stamp_outside_surface_is_a_no_op() {
    let mut s = Surface::new(10, 10).unwrap();
    s.fill(Rgba::WHITE);
    let before = s.snapshot();
    assert!(s.stamp_circle(Point::new(-50.0, 5.0), 5.0, RED).is_none());
    assert!(s.stamp_circle(Point::new(5.0, 5.0), 0.0, RED).is_none());
    assert!(s.stamp_circle(Point::new(f64::NAN, 5.0), 5.0, RED).is_none());
    assert_eq!(s.snapshot(), before);
}

#[test]
fn region_extracts_rows() {
    let mut s = Surface::new(4, 4).unwrap();
    s.fill(Rgba::WHITE);
    s.stamp_circle(Point::new(1.5, 1.5), 0.5, RED);
    let bytes = s.region(DirtyRect { x: 1, y: 1, width: 2, height: 1 });
    assert_eq!(bytes, vec![255, 0, 0, 255, 255, 255, 255, 255]);
    assert_eq!(s.region(s.full_rect()).len(), s.pixels().len());
}

#[test]
fn region_outside_is_empty() {
    let s = Surface::new(4, 4).unwrap();
    assert!(s.region(DirtyRect { x: 9, y: 0, width: 2, height: 2 }).is_empty());
}

#[test]
fn snapshot_restore_round_trip() {
    let mut s = Surface::new(8, 8).unwrap();
    s.fill(Rgba::WHITE);
    let clean = s.snapshot();
    s.stamp_circle(Point::new(4.0, 4.0), 3.0, RED);
    assert_ne!(s.snapshot(), clean);
    s.restore(&clean);
    assert_eq!(s.snapshot(), clean);
    assert_eq!(clean.bytes().len(), 8 * 8 * 4);
}

#[test]
fn restore_ignores_foreign_snapshot() {
    let mut s = Surface::new(2, 2).unwrap();
    s.fill(Rgba::WHITE);
    let other = Surface::new(3, 3).unwrap().snapshot();
    s.restore(&other);
    assert_eq!(s.pixel(0, 0), Some(Rgba::WHITE));
}

#[test]
fn dirty_rect_union_covers_both() {
    let a = DirtyRect { x: 0, y: 0, width: 2, height: 2 };
    let b = DirtyRect { x: 5, y: 1, width: 1, height: 4 };
    assert_eq!(a.union(b), DirtyRect { x: 0, y: 0, width: 6, height: 5 });
}
