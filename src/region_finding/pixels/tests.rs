use crate::region_finding::common::error::RegionError;
use crate::region_finding::pixels::{Color, PixelBuffer, PixelFormat, Point};

#[test]
fn test_from_raw_rejects_wrong_length() {
    let result = PixelBuffer::from_raw(4, 4, PixelFormat::Rgb8, vec![0u8; 4 * 4 * 4]);

    assert!(matches!(
        result.unwrap_err(),
        RegionError::BufferSizeMismatch { expected: 48, actual: 64 }
    ));
}

#[test]
fn test_from_raw_rejects_overflowing_dimensions() {
    let result = PixelBuffer::from_raw(usize::MAX / 2, 3, PixelFormat::Rgb8, Vec::new());
    assert!(matches!(result, Err(RegionError::InvalidDimensions(_, 3))));

    let result = PixelBuffer::from_raw(1usize << (usize::BITS - 2), 4, PixelFormat::Rgba8, Vec::new());
    assert!(matches!(result, Err(RegionError::InvalidDimensions(_, 4))));
}

#[test]
fn test_constructors_reject_overflowing_dimensions() {
    assert!(matches!(
        PixelBuffer::new(usize::MAX, usize::MAX, PixelFormat::Rgb8),
        Err(RegionError::InvalidDimensions(_, _))
    ));
    assert!(matches!(
        PixelBuffer::filled(usize::MAX / 2, 2, Color::WHITE),
        Err(RegionError::InvalidDimensions(_, 2))
    ));
}

#[test]
fn test_rgb_pixels_report_full_alpha() {
    let data = vec![10, 20, 30, 40, 50, 60];
    let buffer = PixelBuffer::from_raw(2, 1, PixelFormat::Rgb8, data).unwrap();

    assert_eq!(buffer.get_pixel(0, 0), Some(Color::rgba(10, 20, 30, 255)));
    assert_eq!(buffer.get_pixel(1, 0), Some(Color::rgb(40, 50, 60)));
    assert_eq!(buffer.get_pixel(2, 0), None);
    assert_eq!(buffer.get_pixel(0, 1), None);
}

#[test]
fn test_set_pixel_out_of_bounds() {
    let mut buffer = PixelBuffer::new(3, 2, PixelFormat::Rgba8).unwrap();

    let err = buffer.set_pixel(3, 0, Color::WHITE).unwrap_err();
    assert!(matches!(
        err,
        RegionError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 }
    ));
}

#[test]
fn test_set_pixel_rgb_drops_alpha() {
    let mut buffer = PixelBuffer::new(2, 2, PixelFormat::Rgb8).unwrap();
    buffer.set_pixel(1, 1, Color::rgba(1, 2, 3, 4)).unwrap();

    assert_eq!(buffer.get_pixel(1, 1), Some(Color::rgb(1, 2, 3)));
    assert_eq!(&buffer.as_bytes()[9..12], &[1, 2, 3]);
}

#[test]
fn test_filled_and_raster_order() {
    let buffer = PixelBuffer::filled(3, 2, Color::rgb(7, 8, 9)).unwrap();
    let points: Vec<Point> = buffer.pixels().map(|(p, _)| p).collect();

    assert_eq!(buffer.format(), PixelFormat::Rgba8);
    assert_eq!(points.len(), 6);
    assert_eq!(points[0], Point::new(0, 0));
    assert_eq!(points[2], Point::new(2, 0));
    assert_eq!(points[3], Point::new(0, 1));
    assert!(buffer.pixels().all(|(_, c)| c == Color::rgb(7, 8, 9)));
}

#[test]
fn test_empty_buffer_has_no_pixels() {
    let buffer = PixelBuffer::new(0, 5, PixelFormat::Rgb8).unwrap();

    assert_eq!(buffer.pixel_count(), 0);
    assert_eq!(buffer.pixels().count(), 0);
    assert!(!buffer.contains(0, 0));
}

#[test]
fn test_color_parsing() {
    assert_eq!("#32c832".parse::<Color>().unwrap(), Color::rgb(50, 200, 50));
    assert_eq!("FF0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
    assert_eq!("50, 200, 50".parse::<Color>().unwrap(), Color::rgb(50, 200, 50));

    assert!(matches!("256,0,0".parse::<Color>(), Err(RegionError::InvalidColor(_))));
    assert!(matches!("1,2".parse::<Color>(), Err(RegionError::InvalidColor(_))));
    assert!(matches!("#12345".parse::<Color>(), Err(RegionError::InvalidColor(_))));
    assert!(matches!("zzzzzz".parse::<Color>(), Err(RegionError::InvalidColor(_))));
}

#[test]
fn test_rgb24_round_trip_and_display() {
    let color = Color::from_rgb24(0x12_34_56);

    assert_eq!(color, Color::rgb(0x12, 0x34, 0x56));
    assert_eq!(color.to_rgb24(), 0x12_34_56);
    assert_eq!(color.to_string(), "#123456");
    assert_eq!(Color::from_rgb24(0xFF_00_00_00), Color::BLACK);
}
