use super::*;

#[test]
fn new_buffer_is_zeroed_with_expected_len() {
    let buf = PixelBuffer::new(5, 3, Channels::Rgba).unwrap();
    assert_eq!(buf.as_bytes().len(), 5 * 3 * 4);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(buf.row(2).unwrap().len(), 20);
    assert!(buf.row(3).is_none());
}

#[test]
fn from_raw_rejects_length_mismatch() {
    let err = PixelBuffer::from_raw(2, 2, Channels::Rgb, vec![0u8; 11]).unwrap_err();
    assert_eq!(
        err.kind(),
        crate::foundation::error::ErrorKind::UnsupportedChannelLayout
    );
}

#[test]
fn channel_count_must_be_three_or_four() {
    assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
    assert_eq!(Channels::from_count(4).unwrap(), Channels::Rgba);
    assert!(Channels::from_count(1).is_err());
    assert_eq!(
        Channels::from_count(2).unwrap_err().kind(),
        crate::foundation::error::ErrorKind::UnsupportedChannelLayout
    );
}

#[test]
fn set_pixel_writes_opaque_alpha_on_rgba() {
    let mut buf = PixelBuffer::new(3, 3, Channels::Rgba).unwrap();
    buf.set_pixel(1, 2, Color::new(10, 20, 30));
    assert_eq!(buf.get_pixel(1, 2).unwrap(), &[10, 20, 30, 255]);
    assert_eq!(buf.get_pixel(0, 0).unwrap(), &[0, 0, 0, 0]);
}

#[test]
fn set_pixel_on_rgb_touches_three_bytes() {
    let mut buf = PixelBuffer::from_raw(2, 1, Channels::Rgb, vec![9u8; 6]).unwrap();
    buf.set_pixel(1, 0, Color::new(1, 2, 3));
    assert_eq!(buf.as_bytes(), &[9, 9, 9, 1, 2, 3]);
}

#[test]
fn out_of_range_writes_are_clipped() {
    let mut buf = PixelBuffer::new(4, 4, Channels::Rgba).unwrap();
    let before = buf.clone();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MAX, i32::MIN)] {
        buf.set_pixel(x, y, Color::WHITE);
        assert!(buf.get_pixel(x, y).is_none());
    }
    assert_eq!(buf, before);
}

#[test]
fn to_rgba8_expands_rgb() {
    let buf = PixelBuffer::from_raw(2, 1, Channels::Rgb, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(buf.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn fill_paints_every_pixel() {
    let mut buf = PixelBuffer::new(3, 2, Channels::Rgba).unwrap();
    buf.fill(Color::new(7, 8, 9));
    assert!(
        buf.as_bytes()
            .chunks_exact(4)
            .all(|px| px == [7, 8, 9, 255])
    );
}
