use super::*;
use crate::foundation::core::Color;
use crate::foundation::error::ErrorKind;
use crate::raster::buffer::Channels;

/// Every pixel gets a distinct color derived from its position.
fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h, Channels::Rgba).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            buf.set_pixel(x, y, Color::new(x as u8, y as u8, (x * 7 + y * 13) as u8));
        }
    }
    buf
}

/// Pixel-by-pixel copy reading from an untouched clone of the source.
fn reference_copy(buf: &PixelBuffer, src: (i32, i32, i32, i32), dest: (i32, i32)) -> PixelBuffer {
    let (l, t, r, b) = src;
    let mut out = buf.clone();
    for y in t..b {
        for x in l..r {
            let c = buf.color_at(x, y).unwrap();
            out.set_pixel(dest.0 + (x - l), dest.1 + (y - t), c);
        }
    }
    out
}

fn spec(src: (i32, i32, i32, i32), dest: (i32, i32)) -> CopySpec {
    CopySpec {
        src_top_left: IPoint::new(src.0, src.1),
        src_bottom_right: IPoint::new(src.2, src.3),
        dest: dest.into(),
    }
}

#[test]
fn overlapping_copy_on_three_by_three_uses_snapshot() {
    let mut buf = gradient(3, 3);
    let orig = buf.clone();
    copy_region(&mut buf, &spec((0, 0, 2, 2), (1, 1))).unwrap();

    assert_eq!(buf.color_at(1, 1), orig.color_at(0, 0));
    assert_eq!(buf.color_at(2, 1), orig.color_at(1, 0));
    assert_eq!(buf.color_at(1, 2), orig.color_at(0, 1));
    assert_eq!(buf.color_at(2, 2), orig.color_at(1, 1));
    assert_eq!(buf.color_at(0, 0), orig.color_at(0, 0));
    assert_eq!(buf.color_at(2, 0), orig.color_at(2, 0));
    assert_eq!(buf.color_at(0, 2), orig.color_at(0, 2));
}

#[test]
fn overlapping_copies_match_disjoint_reference() {
    let cases = [
        ((0, 0, 6, 6), (2, 3)),
        ((3, 3, 9, 8), (1, 1)),
        ((2, 0, 10, 10), (0, 0)),
        ((0, 2, 10, 10), (0, 0)),
        ((0, 0, 10, 10), (5, 5)),
        ((4, 4, 5, 5), (4, 4)),
    ];
    for (src, dest) in cases {
        let orig = gradient(10, 10);
        let expected = reference_copy(&orig, src, dest);
        let mut buf = orig.clone();
        copy_region(&mut buf, &spec(src, dest)).unwrap();
        assert_eq!(buf, expected, "src={src:?} dest={dest:?}");
    }
}

#[test]
fn reversed_source_corners_are_normalized() {
    let orig = gradient(8, 8);
    let mut a = orig.clone();
    let mut b = orig.clone();
    copy_region(&mut a, &spec((5, 6, 1, 2), (2, 2))).unwrap();
    copy_region(&mut b, &spec((1, 2, 5, 6), (2, 2))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn destination_overhang_is_clipped() {
    let orig = gradient(6, 6);
    let mut buf = orig.clone();
    copy_region(&mut buf, &spec((0, 0, 4, 4), (4, 5))).unwrap();
    assert_eq!(buf, reference_copy(&orig, (0, 0, 4, 4), (4, 5)));
    assert_eq!(buf.color_at(5, 5), orig.color_at(1, 0));
}

#[test]
fn full_canvas_source_is_allowed() {
    let orig = gradient(5, 4);
    let mut buf = orig.clone();
    copy_region(&mut buf, &spec((0, 0, 5, 4), (0, 0))).unwrap();
    assert_eq!(buf, orig);
}

#[test]
fn invalid_geometry_is_rejected_without_mutation() {
    let bad = [
        ((2, 2, 2, 5), (0, 0)),
        ((2, 2, 5, 2), (0, 0)),
        ((0, 0, 7, 3), (0, 0)),
        ((0, 0, 3, 7), (0, 0)),
        ((-1, 0, 3, 3), (0, 0)),
        ((0, 0, 3, 3), (6, 0)),
        ((0, 0, 3, 3), (0, 6)),
        ((0, 0, 3, 3), (-1, 2)),
    ];
    for (src, dest) in bad {
        let mut buf = gradient(6, 6);
        let before = buf.clone();
        let err = copy_region(&mut buf, &spec(src, dest)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCoordinateFormat, "{src:?} {dest:?}");
        assert_eq!(buf, before);
    }
}

#[test]
fn copy_rect_to_works_on_rgb_buffers() {
    let mut buf = PixelBuffer::from_raw(
        3,
        1,
        Channels::Rgb,
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
    )
    .unwrap();
    buf.copy_rect_to(IPoint::new(0, 0), IPoint::new(2, 1), IPoint::new(1, 0))
        .unwrap();
    assert_eq!(buf.as_bytes(), &[1, 2, 3, 1, 2, 3, 4, 5, 6]);
}
